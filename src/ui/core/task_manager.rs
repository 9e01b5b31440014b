use super::actions::Action;
use crate::backend::{Backend, WordId};
use crate::vocabulary::SearchTicket;
use log::debug;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

impl BackgroundTask {
    pub fn elapsed(&self) -> std::time::Duration {
        self.started_at.elapsed()
    }
}

/// Runs remote operations off the UI loop and reports each outcome back as an [`Action`].
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a future whose output is sent back to the UI loop
    pub fn spawn<Fut>(&mut self, description: impl Into<String>, operation: Fut) -> TaskId
    where
        Fut: Future<Output = Action> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let description = description.into();
        debug!("Task {task_id} started: {description}");

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            let action = operation.await;
            // The receiver is gone only while the app is shutting down
            let _ = action_sender.send(action);
        });

        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Exchange credentials for a token
    pub fn spawn_login(&mut self, backend: Arc<dyn Backend>, username: String, password: String) -> TaskId {
        self.spawn(format!("Login as '{username}'"), async move {
            Action::LoginCompleted(backend.request_token(username.trim(), &password).await)
        })
    }

    /// Look up the term carried by `ticket`
    pub fn spawn_search(&mut self, backend: Arc<dyn Backend>, ticket: SearchTicket) -> TaskId {
        self.spawn(format!("Search '{}'", ticket.term()), async move {
            let result = backend.lookup_word(ticket.term()).await;
            Action::SearchCompleted { ticket, result }
        })
    }

    pub fn spawn_delete(&mut self, backend: Arc<dyn Backend>, id: WordId) -> TaskId {
        self.spawn(format!("Delete word #{id}"), async move {
            let result = backend.delete_word(id).await;
            Action::DeleteCompleted { id, result }
        })
    }

    /// Fetch the saved-words list
    pub fn spawn_load(&mut self, backend: Arc<dyn Backend>) -> TaskId {
        self.spawn("Load saved words", async move {
            Action::SavedWordsLoaded(backend.fetch_words().await)
        })
    }

    /// Forget finished tasks and return their ids
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                debug!("Task {} finished after {:?}: {}", task.id, task.elapsed(), task.description);
            }
        }

        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.values().filter(|task| !task.handle.is_finished()).count()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
