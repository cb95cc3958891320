mod helpers;

use helpers::MockQueryLogRepository;
use pinpoint_dns_application::ports::QueryLogRepository;
use pinpoint_dns_application::use_cases::GetRecentQueriesUseCase;
use pinpoint_dns_domain::{QueryLog, RecordType};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::test]
async fn test_get_recent_returns_newest_first_with_total() {
    let repo = Arc::new(MockQueryLogRepository::new());
    let peer: SocketAddr = "10.0.0.1:5000".parse().unwrap();

    for name in ["a.test", "b.test", "c.test"] {
        repo.append(QueryLog::new(peer, name, RecordType::A))
            .await
            .unwrap();
    }

    let use_case = GetRecentQueriesUseCase::new(repo);
    let recent = use_case.execute(2).await.unwrap();

    assert_eq!(recent.total, 3);
    let names: Vec<String> = recent.entries.iter().map(|e| e.domain.to_string()).collect();
    assert_eq!(names, vec!["c.test", "b.test"]);
}

#[tokio::test]
async fn test_get_recent_on_empty_log() {
    let use_case = GetRecentQueriesUseCase::new(Arc::new(MockQueryLogRepository::new()));
    let recent = use_case.execute(10).await.unwrap();

    assert_eq!(recent.total, 0);
    assert!(recent.entries.is_empty());
}
