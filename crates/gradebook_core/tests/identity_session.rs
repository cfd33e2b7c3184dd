use gradebook_core::db::open_db_in_memory;
use gradebook_core::{
    Grade, IdentityProvider, RecordService, RecordServiceError, SessionIdentityProvider,
    SqliteRecordRepository, Subject,
};

#[test]
fn record_operations_fail_fast_without_a_session() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteRecordRepository::try_new(&mut conn).unwrap();
    let mut service = RecordService::new(repo, SessionIdentityProvider::new());

    let err = service
        .save_current(&[Subject::new("Algorithms", 3, Grade::A)])
        .unwrap_err();
    assert!(matches!(err, RecordServiceError::NotAuthenticated));

    let err = service.load_current().unwrap_err();
    assert!(matches!(err, RecordServiceError::NotAuthenticated));

    // Fail-fast means the store is never touched.
    drop(service);
    let records: i64 = conn
        .query_row("SELECT COUNT(*) FROM student_records;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(records, 0);
}

#[test]
fn signed_in_session_saves_and_loads_its_own_record() {
    let mut conn = open_db_in_memory().unwrap();
    let mut provider = SessionIdentityProvider::new();
    provider
        .sign_in("acct-1", "Ada", Some("ada@example.com"))
        .unwrap();

    let repo = SqliteRecordRepository::try_new(&mut conn).unwrap();
    let mut service = RecordService::new(repo, provider);

    let subjects = vec![Subject::new("Algorithms", 3, Grade::A)];
    let stored = service.save_current(&subjects).unwrap();
    assert_eq!(stored.account_id, "acct-1");
    assert_eq!(stored.display_name, "Ada");

    let loaded = service.load_current().unwrap().expect("record should load");
    assert_eq!(loaded.subjects, subjects);
}

#[test]
fn blank_display_name_falls_back_to_email_on_save() {
    let mut conn = open_db_in_memory().unwrap();
    let mut provider = SessionIdentityProvider::new();
    provider
        .sign_in("acct-1", "   ", Some("ada@example.com"))
        .unwrap();

    let repo = SqliteRecordRepository::try_new(&mut conn).unwrap();
    let mut service = RecordService::new(repo, provider);

    let stored = service
        .save_current(&[Subject::new("Databases", 4, Grade::B)])
        .unwrap();
    assert_eq!(stored.display_name, "ada@example.com");
}

#[test]
fn updated_display_name_is_stamped_on_the_next_save() {
    let mut conn = open_db_in_memory().unwrap();
    let mut provider = SessionIdentityProvider::new();
    provider.sign_in("acct-1", "Ada", None).unwrap();
    provider.update_display_name("Ada L.").unwrap();
    assert_eq!(
        provider.current_profile().unwrap().display_name,
        "Ada L."
    );

    let repo = SqliteRecordRepository::try_new(&mut conn).unwrap();
    let mut service = RecordService::new(repo, provider);
    let stored = service
        .save_current(&[Subject::new("Compilers", 3, Grade::APlus)])
        .unwrap();
    assert_eq!(stored.display_name, "Ada L.");
}

#[test]
fn sign_out_removes_the_session_for_later_services() {
    let mut conn = open_db_in_memory().unwrap();
    let mut provider = SessionIdentityProvider::new();
    provider.sign_in("acct-1", "Ada", None).unwrap();
    provider.sign_out();
    assert!(provider.current_profile().is_none());

    let repo = SqliteRecordRepository::try_new(&mut conn).unwrap();
    let mut service = RecordService::new(repo, provider);
    let err = service
        .save_current(&[Subject::new("Networks", 3, Grade::B)])
        .unwrap_err();
    assert!(matches!(err, RecordServiceError::NotAuthenticated));
}
