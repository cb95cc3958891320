pub mod fixed_address;

pub use fixed_address::FixedAddressResolver;
