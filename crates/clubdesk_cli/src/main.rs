//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `clubdesk_core` wiring:
//!   open a store, log in as the demo admin, create and list a notice.
//! - Host the stdin-backed delete confirmation used by terminal flows.

use chrono::Local;
use clubdesk_core::{
    db::open_db_in_memory, DeletePrompt, EntityController, EntityId, EntityKind, Notice,
    NoticeDraft, Priority, Session, Task,
};
use std::io::{BufRead, Write};

/// Terminal yes/no guard for deletes.
///
/// Anything other than an explicit `y`/`yes` declines.
struct StdinPrompt;

impl DeletePrompt for StdinPrompt {
    fn confirm(&self, kind: EntityKind, id: EntityId) -> bool {
        print!("Delete {} {id}? [y/N] ", kind.as_str());
        if std::io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

fn main() {
    println!("clubdesk_core version={}", clubdesk_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open store: {err}");
            std::process::exit(1);
        }
    };

    let mut session = match Session::restore(&conn) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("failed to restore session: {err}");
            std::process::exit(1);
        }
    };

    let admin = match session.login("admin@nstsdc.com", "password123") {
        Ok(identity) => identity.clone(),
        Err(err) => {
            eprintln!("login failed: {err}");
            std::process::exit(1);
        }
    };
    println!("logged in as {} ({:?})", admin.name, admin.role);

    let notices = EntityController::<Notice>::new(&conn);
    let created = match notices.create(
        &admin,
        NoticeDraft {
            title: "Welcome".to_string(),
            content: "First meeting on Friday.".to_string(),
            priority: Priority::High,
        },
    ) {
        Ok(notice) => notice,
        Err(err) => {
            eprintln!("failed to create notice: {err}");
            std::process::exit(1);
        }
    };

    match notices.list(&admin) {
        Ok(list) => {
            for notice in &list {
                println!(
                    "notice: {} [{:?}] {}",
                    notice.title,
                    notice.priority,
                    notice.created_at.format("%Y-%m-%d")
                );
            }
        }
        Err(err) => {
            eprintln!("failed to list notices: {err}");
            std::process::exit(1);
        }
    }

    let tasks = EntityController::<Task>::new(&conn);
    let today = Local::now().date_naive();
    match tasks.list(&admin) {
        Ok(list) => {
            for task in &list {
                let flag = if task.is_overdue(today) { " (overdue)" } else { "" };
                println!("task: {} due {}{flag}", task.title, task.deadline);
            }
        }
        Err(err) => {
            eprintln!("failed to list tasks: {err}");
            std::process::exit(1);
        }
    }

    if std::env::args().any(|arg| arg == "--delete-demo") {
        match notices.delete(&admin, created.id, &StdinPrompt) {
            Ok(outcome) => println!("delete outcome: {outcome:?}"),
            Err(err) => eprintln!("failed to delete notice: {err}"),
        }
    }
}
