//! Interactive project-management console.
//!
//! Presents the numeric menu over the task store, command invoker,
//! filters, reports, and approval policy. All input validation happens
//! here; the core layers only ever see well-formed values.

use foreman::approval::ApprovalPolicy;
use foreman::filter::{
    AssigneeFilter, CompositeFilter, FilterStrategy, PriorityFilter, StatusFilter,
};
use foreman::report::{AssigneeReport, ExportReport, PriorityReport, ReportService, StatusReport};
use foreman::task::adapters::{ActivityLog, AssigneeNotifier, ManagerNotifier};
use foreman::task::domain::{NewTask, Task, TaskId, TaskPriority, TaskStatus};
use foreman::task::services::{AssignTask, CommandInvoker, CreateTask, TaskStore, UpdateStatus};
use mockable::DefaultClock;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

const MENU: &str = "\n=== Project Management System ===\n\nOptions:\n\
1. List all tasks\n\
2. View task details\n\
3. Create new task\n\
4. Update task status\n\
5. Assign task\n\
6. Add comment to task\n\
7. Filter tasks\n\
8. Generate report\n\
9. Request task approval\n\
10. Undo last action\n\
0. Exit";

struct App {
    store: TaskStore<DefaultClock>,
    invoker: CommandInvoker<DefaultClock>,
    reports: ReportService,
    policy: ApprovalPolicy,
}

impl App {
    fn new() -> Self {
        let mut store = TaskStore::new();
        store.bus_mut().attach(Arc::new(AssigneeNotifier::new(io::stdout())));
        store.bus_mut().attach(Arc::new(ManagerNotifier::new(io::stdout())));
        store.bus_mut().attach(Arc::new(ActivityLog::new()));

        let mut reports = ReportService::new();
        reports.register("status", Box::new(StatusReport));
        reports.register("assignee", Box::new(AssigneeReport));
        reports.register("priority", Box::new(PriorityReport));
        reports.register("export", Box::new(ExportReport));

        let mut app = Self {
            store,
            invoker: CommandInvoker::new(),
            reports,
            policy: ApprovalPolicy::standard(),
        };
        app.seed_sample_data();
        app
    }

    fn seed_sample_data(&mut self) {
        let samples = [
            NewTask::new(
                "Implement login feature",
                "Create login UI and authentication logic",
            )
            .with_assignee("alex")
            .with_priority(TaskPriority::High),
            NewTask::new("Design database schema", "Create ER diagram and SQL scripts")
                .with_assignee("maria"),
            NewTask::new(
                "Fix security vulnerability",
                "Address injection flaw in the authentication module",
            )
            .with_assignee("alex")
            .with_priority(TaskPriority::Critical),
            NewTask::new("Update documentation", "Update user guide with new features")
                .with_assignee("sam")
                .with_priority(TaskPriority::Low),
        ];
        for new_task in samples {
            self.invoker
                .execute(Box::new(CreateTask::new(new_task)), &mut self.store);
        }
        self.invoker.execute(
            Box::new(UpdateStatus::new(TaskId::new(2), TaskStatus::InProgress)),
            &mut self.store,
        );
        self.invoker.execute(
            Box::new(UpdateStatus::new(TaskId::new(4), TaskStatus::Done)),
            &mut self.store,
        );
    }
}

/// Line-oriented console over stdin/stdout.
struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Reads one line, returning `None` once input is exhausted.
    fn prompt_line(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn prompt(&mut self, message: &str) -> io::Result<String> {
        Ok(self.prompt_line(message)?.unwrap_or_default())
    }

    fn prompt_task_id(&mut self) -> io::Result<Option<TaskId>> {
        let raw = self.prompt("Enter task id: ")?;
        match raw.parse::<u64>() {
            Ok(value) if value > 0 => Ok(Some(TaskId::new(value))),
            _ => {
                self.say("Invalid task id.")?;
                Ok(None)
            }
        }
    }

    fn prompt_status(&mut self) -> io::Result<Option<TaskStatus>> {
        let raw = self.prompt("Enter status (to_do, in_progress, review, done): ")?;
        match TaskStatus::try_from(raw.as_str()) {
            Ok(status) => Ok(Some(status)),
            Err(err) => {
                self.say(&err.to_string())?;
                Ok(None)
            }
        }
    }

    fn prompt_priority(&mut self) -> io::Result<Option<TaskPriority>> {
        let raw = self.prompt("Enter priority (low, medium, high, critical): ")?;
        match TaskPriority::try_from(raw.as_str()) {
            Ok(priority) => Ok(Some(priority)),
            Err(err) => {
                self.say(&err.to_string())?;
                Ok(None)
            }
        }
    }
}

fn render_details(task: &Task) -> String {
    let mut lines = vec![
        format!("ID: {}", task.id()),
        format!("Title: {}", task.title()),
        format!("Description: {}", task.description()),
        format!("Status: {}", task.status()),
        format!("Priority: {}", task.priority()),
        format!("Assignee: {}", task.assignee().unwrap_or("Unassigned")),
        format!("Created: {}", task.created_at().format("%Y-%m-%d %H:%M")),
        format!("Updated: {}", task.updated_at().format("%Y-%m-%d %H:%M")),
    ];
    if !task.comments().is_empty() {
        lines.push("\nComments:".to_owned());
        for (index, comment) in task.comments().iter().enumerate() {
            lines.push(format!(
                "  {}. [{}] {}: {}",
                index + 1,
                comment.posted_at.format("%Y-%m-%d %H:%M"),
                comment.author,
                comment.text
            ));
        }
    }
    lines.join("\n")
}

fn list_tasks<R: BufRead, W: Write>(app: &App, console: &mut Console<R, W>) -> io::Result<()> {
    let tasks = app.store.list();
    if tasks.is_empty() {
        return console.say("No tasks found.");
    }
    for task in tasks {
        console.say(&task.to_string())?;
    }
    Ok(())
}

fn view_details<R: BufRead, W: Write>(app: &App, console: &mut Console<R, W>) -> io::Result<()> {
    let Some(id) = console.prompt_task_id()? else {
        return Ok(());
    };
    app.store.get(id).map_or_else(
        || format!("Task {id} not found."),
        |task| render_details(&task),
    )
    .lines()
    .try_for_each(|line| console.say(line))
}

fn create_task<R: BufRead, W: Write>(app: &mut App, console: &mut Console<R, W>) -> io::Result<()> {
    let title = console.prompt("Title: ")?;
    if title.is_empty() {
        return console.say("Title must not be empty.");
    }
    let description = console.prompt("Description: ")?;
    let Some(priority) = console.prompt_priority()? else {
        return Ok(());
    };
    let assignee = console.prompt("Assignee (blank for none): ")?;

    let mut new_task = NewTask::new(title, description).with_priority(priority);
    if !assignee.is_empty() {
        new_task = new_task.with_assignee(assignee);
    }
    app.invoker
        .execute(Box::new(CreateTask::new(new_task)), &mut app.store);
    console.say("Task created.")
}

fn update_status<R: BufRead, W: Write>(
    app: &mut App,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(id) = console.prompt_task_id()? else {
        return Ok(());
    };
    let Some(status) = console.prompt_status()? else {
        return Ok(());
    };
    app.invoker
        .execute(Box::new(UpdateStatus::new(id, status)), &mut app.store);
    console.say("Status update recorded.")
}

fn assign_task<R: BufRead, W: Write>(app: &mut App, console: &mut Console<R, W>) -> io::Result<()> {
    let Some(id) = console.prompt_task_id()? else {
        return Ok(());
    };
    let name = console.prompt("Assignee (blank to clear): ")?;
    let assignee = if name.is_empty() { None } else { Some(name) };
    app.invoker
        .execute(Box::new(AssignTask::new(id, assignee)), &mut app.store);
    console.say("Assignment recorded.")
}

fn add_comment<R: BufRead, W: Write>(app: &mut App, console: &mut Console<R, W>) -> io::Result<()> {
    let Some(id) = console.prompt_task_id()? else {
        return Ok(());
    };
    let text = console.prompt("Comment: ")?;
    if text.is_empty() {
        return console.say("Comment must not be empty.");
    }
    let author = console.prompt("Author: ")?;
    match app.store.add_comment(id, text, author) {
        Some(_) => console.say("Comment added."),
        None => console.say(&format!("Task {id} not found.")),
    }
}

fn build_filter<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<Box<dyn FilterStrategy>>> {
    let choice = console.prompt(
        "Filter by: 1. Status  2. Assignee  3. Priority  4. Status and priority\nChoice: ",
    )?;
    let strategy: Box<dyn FilterStrategy> = match choice.as_str() {
        "1" => match console.prompt_status()? {
            Some(status) => Box::new(StatusFilter::new(status)),
            None => return Ok(None),
        },
        "2" => {
            let assignee = console.prompt("Assignee: ")?;
            Box::new(AssigneeFilter::new(assignee))
        }
        "3" => match console.prompt_priority()? {
            Some(priority) => Box::new(PriorityFilter::new(priority)),
            None => return Ok(None),
        },
        "4" => {
            let Some(status) = console.prompt_status()? else {
                return Ok(None);
            };
            let Some(priority) = console.prompt_priority()? else {
                return Ok(None);
            };
            Box::new(
                CompositeFilter::new()
                    .with(Box::new(StatusFilter::new(status)))
                    .with(Box::new(PriorityFilter::new(priority))),
            )
        }
        _ => {
            console.say("Unknown filter choice.")?;
            return Ok(None);
        }
    };
    Ok(Some(strategy))
}

fn filter_tasks<R: BufRead, W: Write>(app: &App, console: &mut Console<R, W>) -> io::Result<()> {
    let Some(strategy) = build_filter(console)? else {
        return Ok(());
    };
    let matches = strategy.filter(&app.store.list());
    if matches.is_empty() {
        return console.say("No tasks match the filter.");
    }
    for task in matches {
        console.say(&task.to_string())?;
    }
    Ok(())
}

fn generate_report<R: BufRead, W: Write>(app: &App, console: &mut Console<R, W>) -> io::Result<()> {
    let names = app.reports.available().join(", ");
    let name = console.prompt(&format!("Report ({names}): "))?;
    let text = app.reports.generate(&name, &app.store.list());
    text.lines().try_for_each(|line| console.say(line))
}

fn request_approval<R: BufRead, W: Write>(
    app: &App,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(id) = console.prompt_task_id()? else {
        return Ok(());
    };
    match app.store.get(id) {
        Some(task) => {
            let decision = app.policy.decide(&task);
            console.say(&decision.describe(&task))
        }
        None => console.say(&format!("Task {id} not found.")),
    }
}

fn undo_last<R: BufRead, W: Write>(app: &mut App, console: &mut Console<R, W>) -> io::Result<()> {
    if app.invoker.undo_last(&mut app.store) {
        console.say("Undid last action.")
    } else {
        console.say("No actions to undo.")
    }
}

fn dispatch<R: BufRead, W: Write>(
    choice: &str,
    app: &mut App,
    console: &mut Console<R, W>,
) -> io::Result<bool> {
    match choice {
        "0" => return Ok(false),
        "1" => list_tasks(app, console)?,
        "2" => view_details(app, console)?,
        "3" => create_task(app, console)?,
        "4" => update_status(app, console)?,
        "5" => assign_task(app, console)?,
        "6" => add_comment(app, console)?,
        "7" => filter_tasks(app, console)?,
        "8" => generate_report(app, console)?,
        "9" => request_approval(app, console)?,
        "10" => undo_last(app, console)?,
        _ => console.say("Unknown choice, enter a number between 0 and 10.")?,
    }
    Ok(true)
}

fn run<R: BufRead, W: Write>(app: &mut App, console: &mut Console<R, W>) -> io::Result<()> {
    loop {
        console.say(MENU)?;
        let Some(choice) = console.prompt_line("\nSelect an option: ")? else {
            return console.say("Goodbye.");
        };
        if !dispatch(&choice, app, console)? {
            return console.say("Goodbye.");
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();
    let mut app = App::new();
    let stdin = io::stdin();
    let mut console = Console {
        input: stdin.lock(),
        output: io::stdout(),
    };
    run(&mut app, &mut console)
}
