//! Several sessions sharing one registry.

use super::helpers::{TestSession, repository, session_over, work_task};
use std::{sync::Arc, thread};

use rstest::rstest;
use tasktally::{
    account::adapters::memory::InMemoryAccountRepository,
    session::services::SessionError,
    task::domain::TaskSortKey,
};

fn logged_in(repository: &Arc<InMemoryAccountRepository>, username: &str) -> TestSession {
    let mut session = session_over(repository);
    session
        .login(username, "pw1")
        .expect("login should succeed");
    session
}

#[rstest]
fn concurrent_sessions_for_one_user_lose_no_tasks(repository: Arc<InMemoryAccountRepository>) {
    session_over(&repository)
        .register("alice", "pw1")
        .expect("registration should succeed");

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let session = logged_in(&repository, "alice");
            thread::spawn(move || {
                for n in 0..10 {
                    session
                        .add_task(work_task(
                            &format!("Task {worker}-{n}"),
                            "2025-06-01",
                            "Medium",
                        ))
                        .expect("add should succeed");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker thread should finish");
    }

    let tasks = logged_in(&repository, "alice")
        .view_tasks(TaskSortKey::Title)
        .expect("view should succeed");
    assert_eq!(tasks.len(), 40);
}

#[rstest]
fn concurrent_registration_of_one_name_admits_exactly_one(
    repository: Arc<InMemoryAccountRepository>,
) {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shared = Arc::clone(&repository);
            thread::spawn(move || session_over(&shared).register("alice", "pw1"))
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("worker thread should finish"))
        .collect();

    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(
        results
            .iter()
            .filter_map(|result| result.as_ref().err())
            .all(|err| matches!(err, SessionError::DuplicateAccount(_)))
    );
}

#[rstest]
fn accounts_on_a_shared_registry_stay_isolated(repository: Arc<InMemoryAccountRepository>) {
    let registrar = session_over(&repository);
    registrar
        .register("alice", "pw1")
        .expect("registration should succeed");
    registrar
        .register("bob", "pw1")
        .expect("registration should succeed");

    let alice = logged_in(&repository, "alice");
    let bob = logged_in(&repository, "bob");
    alice
        .add_task(work_task("Pay rent", "2025-02-01", "High"))
        .expect("add should succeed");

    assert!(
        bob.search_tasks("")
            .expect("search should succeed")
            .is_empty()
    );
    assert_eq!(
        alice.search_tasks("rent").expect("search should succeed").len(),
        1
    );
}
