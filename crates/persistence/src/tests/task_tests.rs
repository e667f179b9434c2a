// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for task assignment, completion and deletion.

use super::{create_test_employee, create_test_persistence, ymd};
use crate::{Persistence, PersistenceError, TaskData, TaskFilter};
use office_report_domain::{EmployeeSelector, TaskStatusFilter};

#[test]
fn test_create_task_requires_existing_employee() {
    let mut persistence: Persistence = create_test_persistence();
    let result: Result<i64, PersistenceError> = persistence.create_task(77, "Anything", None);
    assert_eq!(result, Err(PersistenceError::EmployeeNotFound(77)));
}

#[test]
fn test_list_tasks_orders_by_due_date_with_undated_last() {
    let mut persistence: Persistence = create_test_persistence();
    let asha: i64 = create_test_employee(&mut persistence, "asha", "Asha Rao");

    let undated: i64 = persistence.create_task(asha, "Someday", None).unwrap();
    let later: i64 = persistence
        .create_task(asha, "Later", Some(ymd(2024, 3, 1)))
        .unwrap();
    let sooner: i64 = persistence
        .create_task(asha, "Sooner", Some(ymd(2024, 2, 1)))
        .unwrap();

    let tasks: Vec<TaskData> = persistence.list_tasks(&TaskFilter::default()).unwrap();
    let ids: Vec<i64> = tasks.iter().map(|t| t.task_id).collect();
    assert_eq!(ids, vec![sooner, later, undated]);
    assert_eq!(tasks[0].employee_name, "Asha Rao");
    assert_eq!(tasks[2].due_date, None);
}

#[test]
fn test_undated_tasks_newest_first() {
    let mut persistence: Persistence = create_test_persistence();
    let asha: i64 = create_test_employee(&mut persistence, "asha", "Asha Rao");

    let first: i64 = persistence.create_task(asha, "First", None).unwrap();
    let second: i64 = persistence.create_task(asha, "Second", None).unwrap();

    let tasks: Vec<TaskData> = persistence.list_tasks(&TaskFilter::default()).unwrap();
    let ids: Vec<i64> = tasks.iter().map(|t| t.task_id).collect();
    assert_eq!(ids, vec![second, first]);
}

#[test]
fn test_list_tasks_filters_by_employee_and_status() {
    let mut persistence: Persistence = create_test_persistence();
    let asha: i64 = create_test_employee(&mut persistence, "asha", "Asha Rao");
    let ben: i64 = create_test_employee(&mut persistence, "ben", "Ben Ode");

    let done: i64 = persistence.create_task(asha, "Done", None).unwrap();
    persistence.create_task(asha, "Open", None).unwrap();
    persistence.create_task(ben, "Ben's", None).unwrap();
    persistence.set_task_completed(done, true).unwrap();

    let filter: TaskFilter = TaskFilter {
        employee: EmployeeSelector::Named(String::from("Asha Rao")),
        status: TaskStatusFilter::Completed,
    };
    let tasks: Vec<TaskData> = persistence.list_tasks(&filter).unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].task_id, done);

    let pending: Vec<TaskData> = persistence
        .list_tasks(&TaskFilter {
            employee: EmployeeSelector::All,
            status: TaskStatusFilter::Pending,
        })
        .unwrap();
    assert_eq!(pending.len(), 2);
    assert!(pending.iter().all(|t| !t.is_completed));

    let bens: Vec<TaskData> = persistence
        .list_tasks_for_employee(ben, TaskStatusFilter::All)
        .unwrap();
    assert_eq!(bens.len(), 1);
}

#[test]
fn test_completing_twice_leaves_one_completed_row() {
    let mut persistence: Persistence = create_test_persistence();
    let asha: i64 = create_test_employee(&mut persistence, "asha", "Asha Rao");
    let task_id: i64 = persistence.create_task(asha, "Ship it", None).unwrap();

    persistence.set_task_completed(task_id, true).unwrap();
    persistence.set_task_completed(task_id, true).unwrap();

    let completed: Vec<TaskData> = persistence
        .list_tasks_for_employee(asha, TaskStatusFilter::Completed)
        .unwrap();
    assert_eq!(completed.len(), 1);
    assert!(completed[0].is_completed);

    persistence.set_task_completed(task_id, false).unwrap();
    assert!(!persistence.get_task(task_id).unwrap().unwrap().is_completed);
}

#[test]
fn test_deleted_task_disappears_from_every_listing() {
    let mut persistence: Persistence = create_test_persistence();
    let asha: i64 = create_test_employee(&mut persistence, "asha", "Asha Rao");
    let task_id: i64 = persistence
        .create_task(asha, "Temporary", Some(ymd(2024, 1, 1)))
        .unwrap();

    persistence.delete_task(task_id).unwrap();

    for status in [
        TaskStatusFilter::All,
        TaskStatusFilter::Pending,
        TaskStatusFilter::Completed,
    ] {
        let tasks: Vec<TaskData> = persistence
            .list_tasks(&TaskFilter {
                employee: EmployeeSelector::All,
                status,
            })
            .unwrap();
        assert!(tasks.iter().all(|t| t.task_id != task_id));
    }
    assert!(persistence.get_task(task_id).unwrap().is_none());
}

#[test]
fn test_unknown_task_operations_are_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    assert_eq!(
        persistence.delete_task(5),
        Err(PersistenceError::TaskNotFound(5))
    );
    assert_eq!(
        persistence.set_task_completed(5, true),
        Err(PersistenceError::TaskNotFound(5))
    );
}
