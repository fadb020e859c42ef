use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    core::SearchParams,
    ygopro::api,
};

pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn search_cards(&self, params: SearchParams, request_id: u64) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                api::search_cards(&params).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::SearchCompleted { request_id, result });
        });
    }

    pub fn fetch_card(&self, id: u32) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result =
                runtime.block_on(async { api::card_by_id(id).await.map_err(|e| e.to_string()) });

            let _ = sender.send(TaskResult::CardFetched(result));
        });
    }

    pub fn check_api_status(&self) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let version = runtime.block_on(async { api::database_version().await.ok() });

            let _ = sender.send(TaskResult::ApiStatus(version));
        });
    }
}
