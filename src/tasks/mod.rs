// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Asynchronous application task processing.
//!
//! This module offloads network requests from the main UI thread. It provides
//! a dedicated worker thread hosting a Tokio runtime that translates
//! [`AppTask`] requests into catalog fetches and broadcasts the outcomes back
//! to the application via [`AppEvent`]s.
//!
//! Every fetch runs as its own Tokio task keyed by its [`FetchToken`], so a
//! cancel request aborts exactly that fetch. Aborting is best effort, a fetch
//! that already finished may still report, and the event loop discards such
//! reports by token.

mod handlers;

use std::{
    collections::HashMap,
    sync::{Arc, mpsc::Sender},
    thread,
};

use anyhow::{Context, Result};
use tokio::{
    runtime::Builder,
    sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel},
    task::AbortHandle,
};
use tracing::{debug, warn};

use crate::{
    events::AppEvent,
    model::{
        FetchToken,
        artwork::ImageFetcher,
        search::{FetchRequest, SearchFetcher},
    },
    net::CatalogService,
};

#[derive(Debug)]
pub(crate) enum AppTask {
    Search(FetchRequest),
    CancelSearch(FetchToken),

    FetchArtwork(FetchToken, String),
    CancelArtwork(FetchToken),
}

/// Sending half of the task channel.
///
/// This is the fetch collaborator handed to the search state and the artwork
/// slots; every request becomes an [`AppTask`] for the worker.
#[derive(Clone)]
pub(crate) struct TaskSender(UnboundedSender<AppTask>);

impl TaskSender {
    pub(crate) fn channel() -> (Self, UnboundedReceiver<AppTask>) {
        let (task_tx, task_rx) = unbounded_channel();
        (Self(task_tx), task_rx)
    }

    fn send(&self, task: AppTask) {
        if let Err(e) = self.0.send(task) {
            warn!(task = ?e.0, "task worker has stopped");
        }
    }
}

impl SearchFetcher for TaskSender {
    fn dispatch(&mut self, request: FetchRequest) {
        self.send(AppTask::Search(request));
    }

    fn cancel(&mut self, token: FetchToken) {
        self.send(AppTask::CancelSearch(token));
    }
}

impl ImageFetcher for TaskSender {
    fn fetch(&mut self, token: FetchToken, url: &str) {
        self.send(AppTask::FetchArtwork(token, url.to_string()));
    }

    fn cancel(&mut self, token: FetchToken) {
        self.send(AppTask::CancelArtwork(token));
    }
}

/// Spawns a background thread to process application tasks.
///
/// The worker thread builds its own Tokio runtime and runs until the task
/// channel is closed, that is, until every [`TaskSender`] has been dropped.
///
/// # Arguments
///
/// * `service` - The catalog the fetches are made against.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker<S: CatalogService>(
    service: S,
    task_rx: UnboundedReceiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> Result<thread::JoinHandle<()>> {
    let runtime = Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("storesearch-fetch")
        .enable_all()
        .build()
        .context("Failed to build task runtime")?;

    let handle = thread::Builder::new()
        .name(String::from("storesearch-tasks"))
        .spawn(move || {
            let mut ctx = TaskContext {
                service: Arc::new(service),
                event_tx,
                in_flight: HashMap::new(),
            };
            runtime.block_on(run_tasks(&mut ctx, task_rx));
        })
        .context("Failed to spawn task worker")?;

    Ok(handle)
}

async fn run_tasks<S: CatalogService>(ctx: &mut TaskContext<S>, mut task_rx: UnboundedReceiver<AppTask>) {
    while let Some(task) = task_rx.recv().await {
        ctx.in_flight.retain(|_, handle| !handle.is_finished());
        handle_task(task, ctx);
    }

    for (_, handle) in ctx.in_flight.drain() {
        handle.abort();
    }
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<S> {
    service: Arc<S>,
    event_tx: Sender<AppEvent>,
    in_flight: HashMap<FetchToken, AbortHandle>,
}

impl<S> TaskContext<S> {
    fn cancel(&mut self, token: FetchToken) {
        if let Some(handle) = self.in_flight.remove(&token) {
            debug!(%token, "aborting fetch");
            handle.abort();
        }
    }
}

/// Orchestrates the execution of a single task.
///
/// Fetches are spawned onto the runtime and report through the application
/// event channel when they finish.
fn handle_task<S: CatalogService>(task: AppTask, ctx: &mut TaskContext<S>) {
    match task {
        AppTask::Search(request) => {
            let token = request.token;
            let handle = tokio::spawn(handlers::search(
                Arc::clone(&ctx.service),
                request,
                ctx.event_tx.clone(),
            ));
            ctx.in_flight.insert(token, handle.abort_handle());
        }
        AppTask::FetchArtwork(token, url) => {
            let handle = tokio::spawn(handlers::fetch_artwork(
                Arc::clone(&ctx.service),
                token,
                url,
                ctx.event_tx.clone(),
            ));
            ctx.in_flight.insert(token, handle.abort_handle());
        }
        AppTask::CancelSearch(token) | AppTask::CancelArtwork(token) => ctx.cancel(token),
    }
}
