//! Bounded-concurrency transfer across all categories.
//!
//! Directories are created up front in table order. Transfers are then
//! started in table/manifest order with at most `limit` in flight, and
//! results are consumed in start order. The first failure in start order is
//! the one reported. Once any transfer fails, transfers that have not begun
//! yet are skipped rather than sent.

use std::path::PathBuf;
use std::pin::pin;
use std::sync::atomic::{AtomicBool, Ordering};

use chefkit_core::{
    Category, CookbookDownloadResult, CookbookEvent, CookbookEventEmitter, CookbookItem,
    CookbookSourceError, CookbookSourcePort,
};
use futures_util::stream::{self, StreamExt};
use tracing::{debug, info};

use crate::fs::ensure_directory;
use crate::plan::DownloadPlan;

enum Transfer {
    Done,
    Skipped,
    Failed(CookbookSourceError),
}

struct Job<'a> {
    category: Category,
    item: &'a CookbookItem,
    path: PathBuf,
}

/// Run every transfer in `plan` with at most `limit` requests in flight.
pub(crate) async fn download_all(
    source: &dyn CookbookSourcePort,
    emitter: &dyn CookbookEventEmitter,
    plan: &DownloadPlan<'_>,
    limit: usize,
    directory_mode: u32,
) -> CookbookDownloadResult<()> {
    for category_plan in plan.non_empty() {
        let category = category_plan.category;
        info!(%category, files = category_plan.items.len(), "Downloading {category}");
        emitter.emit(CookbookEvent::CategoryStarted { category });
        ensure_directory(&category_plan.destination, directory_mode).await?;
    }

    let jobs = plan.non_empty().flat_map(|category_plan| {
        category_plan.items.iter().map(move |item| Job {
            category: category_plan.category,
            item,
            path: category_plan.file_path(item),
        })
    });

    let aborted = AtomicBool::new(false);
    let aborted = &aborted;

    let mut transfers = pin!(
        stream::iter(jobs)
            .map(move |job| async move {
                if aborted.load(Ordering::Acquire) {
                    return Transfer::Skipped;
                }
                debug!(url = %job.item.url, path = %job.path.display(), "Fetching file");
                match source.fetch_file(&job.item.url, &job.path).await {
                    Ok(()) => {
                        emitter.emit(CookbookEvent::FileDownloaded {
                            category: job.category,
                            path: job.path,
                        });
                        Transfer::Done
                    }
                    Err(err) => {
                        aborted.store(true, Ordering::Release);
                        Transfer::Failed(err)
                    }
                }
            })
            .buffered(limit.max(1))
    );

    // A skipped transfer always started after the failure that caused it,
    // so it can never come before that failure in start order.
    while let Some(transfer) = transfers.next().await {
        match transfer {
            Transfer::Done | Transfer::Skipped => {}
            Transfer::Failed(err) => return Err(err.into()),
        }
    }

    Ok(())
}
