//! `sill task` 子命令：在 TUI 之外读写同一份任务列表

use clap::Subcommand;

use crate::storage::tasks::TaskStore;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        /// Task text (words are joined with spaces)
        text: Vec<String>,
    },
    /// List tasks with their ids
    List,
    /// Toggle completion of a task
    Done {
        /// Task id (see `sill task list`)
        id: u64,
    },
    /// Delete a task
    Rm {
        /// Task id (see `sill task list`)
        id: u64,
    },
}

pub fn execute(action: TaskAction) {
    let store = TaskStore::open();

    match action {
        TaskAction::Add { text } => {
            let text = text.join(" ");
            match store.add(&text) {
                Ok(Some(task)) => println!("Added task {}: {}", task.id, task.text),
                Ok(None) => println!("Nothing added: task text is empty."),
                Err(e) => fail(&e.to_string()),
            }
        }
        TaskAction::List => {
            let tasks = store.list();
            if tasks.is_empty() {
                println!("No tasks.");
                return;
            }
            for task in tasks {
                let checkbox = if task.completed { "[x]" } else { "[ ]" };
                println!("{:>4}  {} {}", task.id, checkbox, task.text);
            }
        }
        TaskAction::Done { id } => match store.toggle(id) {
            Ok(task) if task.completed => println!("Done: {}", task.text),
            Ok(task) => println!("Reopened: {}", task.text),
            Err(e) => fail(&e.to_string()),
        },
        TaskAction::Rm { id } => match store.delete(id) {
            Ok(task) => println!("Deleted: {}", task.text),
            Err(e) => fail(&e.to_string()),
        },
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
