// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_employee, create_test_persistence};
use crate::{Persistence, SessionData};

#[test]
fn test_session_lifecycle() {
    let mut persistence: Persistence = create_test_persistence();
    let asha: i64 = create_test_employee(&mut persistence, "asha", "Asha Rao");

    let session_id: i64 = persistence
        .create_session("token-1", asha, "2999-01-01 00:00:00")
        .unwrap();

    let session: SessionData = persistence
        .get_session_by_token("token-1")
        .unwrap()
        .unwrap();
    assert_eq!(session.session_id, session_id);
    assert_eq!(session.employee_id, asha);

    persistence.update_session_activity(session_id).unwrap();
    persistence.delete_session("token-1").unwrap();
    assert!(persistence.get_session_by_token("token-1").unwrap().is_none());
}

#[test]
fn test_delete_sessions_for_employee() {
    let mut persistence: Persistence = create_test_persistence();
    let asha: i64 = create_test_employee(&mut persistence, "asha", "Asha Rao");
    let ben: i64 = create_test_employee(&mut persistence, "ben", "Ben Ode");

    persistence
        .create_session("a1", asha, "2999-01-01 00:00:00")
        .unwrap();
    persistence
        .create_session("a2", asha, "2999-01-01 00:00:00")
        .unwrap();
    persistence
        .create_session("b1", ben, "2999-01-01 00:00:00")
        .unwrap();

    assert_eq!(persistence.delete_sessions_for_employee(asha).unwrap(), 2);
    assert_eq!(persistence.count_sessions_for_employee(asha).unwrap(), 0);
    assert_eq!(persistence.count_sessions_for_employee(ben).unwrap(), 1);
}

#[test]
fn test_delete_expired_sessions() {
    let mut persistence: Persistence = create_test_persistence();
    let asha: i64 = create_test_employee(&mut persistence, "asha", "Asha Rao");

    persistence
        .create_session("old", asha, "2000-01-01 00:00:00")
        .unwrap();
    persistence
        .create_session("fresh", asha, "2999-01-01 00:00:00")
        .unwrap();

    assert_eq!(persistence.delete_expired_sessions().unwrap(), 1);
    assert!(persistence.get_session_by_token("old").unwrap().is_none());
    assert!(persistence.get_session_by_token("fresh").unwrap().is_some());
}
