use async_trait::async_trait;
use pinpoint_dns_infrastructure::dns::DatagramEndpoint;
use std::io;
use std::net::SocketAddr;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

type Datagram = (Vec<u8>, SocketAddr);

/// In-process endpoint: datagrams pushed through the returned sender are
/// received by the dispatcher; everything it sends lands in `sent()`.
/// Dropping the sender makes `recv_from` fail, which ends the receive loop.
pub struct MockEndpoint {
    inbound: tokio::sync::Mutex<mpsc::UnboundedReceiver<Datagram>>,
    outbox: Mutex<Vec<Datagram>>,
    fail_sends: AtomicBool,
    recv_failures: Mutex<VecDeque<io::ErrorKind>>,
}

impl MockEndpoint {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedSender<Datagram>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let endpoint = Self {
            inbound: tokio::sync::Mutex::new(rx),
            outbox: Mutex::new(Vec::new()),
            fail_sends: AtomicBool::new(false),
            recv_failures: Mutex::new(VecDeque::new()),
        };
        (Arc::new(endpoint), tx)
    }

    pub fn set_fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    /// Queues an error for an upcoming `recv_from`, ahead of any inbound datagram.
    pub fn fail_next_recv(&self, kind: io::ErrorKind) {
        self.recv_failures.lock().unwrap().push_back(kind);
    }

    pub fn sent(&self) -> Vec<Datagram> {
        self.outbox.lock().unwrap().clone()
    }
}

#[async_trait]
impl DatagramEndpoint for MockEndpoint {
    async fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        let injected = self.recv_failures.lock().unwrap().pop_front();
        if let Some(kind) = injected {
            return Err(io::Error::new(kind, "injected recv failure"));
        }

        let mut inbound = self.inbound.lock().await;
        match inbound.recv().await {
            Some((bytes, peer)) => {
                let len = bytes.len().min(buf.len());
                buf[..len].copy_from_slice(&bytes[..len]);
                Ok((len, peer))
            }
            None => Err(io::Error::new(io::ErrorKind::BrokenPipe, "inbox closed")),
        }
    }

    async fn send_to(&self, buf: &[u8], target: SocketAddr) -> io::Result<usize> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::ConnectionRefused, "send failed"));
        }
        self.outbox.lock().unwrap().push((buf.to_vec(), target));
        Ok(buf.len())
    }
}
