//! Bounded-concurrency batch execution.

use gb_core::PackageInfo;
use gb_emissions::EmissionsCalculator;
use gb_geo::geocoder::GeocodeProvider;

use crate::manifest::ManifestEntry;
use crate::report::{BatchItem, BatchReport, ItemError};

/// Runs the emissions engine once per package with a fixed concurrency
/// limit.
///
/// Workers share nothing mutable except the calculator's geocode cache
/// (which is internally locked), so each item is independent.  A slow or
/// failed item affects only its own slot in the report.
///
/// With the `parallel` feature, items run on a dedicated Rayon pool of
/// exactly `concurrency` threads; otherwise they run sequentially and
/// `concurrency` is ignored.
pub struct BatchRunner {
    concurrency: usize,
}

impl BatchRunner {
    /// Default concurrency limit for carrier-API-bound workloads.
    pub const DEFAULT_CONCURRENCY: usize = 10;

    pub fn new(concurrency: usize) -> Self {
        Self { concurrency: concurrency.max(1) }
    }

    /// The configured worker limit.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Run the engine over already-normalized packages.
    pub fn run<P: GeocodeProvider>(
        &self,
        calculator: &EmissionsCalculator<P>,
        packages:   &[PackageInfo],
    ) -> BatchReport {
        self.execute(packages.len(), |index| {
            let package = &packages[index];
            BatchItem {
                index,
                tracking_number: package.tracking_number.clone(),
                result: calculator.calculate(package).map_err(ItemError::from),
            }
        })
    }

    /// Run over manifest entries, producing each package through `source`
    /// (carrier fetch + parse, or a fixture lookup in tests).
    ///
    /// Manifest dimensions are appended to whatever the source returns,
    /// mirroring the caller-supplied-dimensions rule for single lookups.
    /// A source failure records the item as failed and moves on.
    pub fn run_manifest<P, F>(
        &self,
        calculator: &EmissionsCalculator<P>,
        entries:    &[ManifestEntry],
        source:     F,
    ) -> BatchReport
    where
        P: GeocodeProvider,
        F: Fn(&ManifestEntry) -> Result<PackageInfo, String> + Sync,
    {
        self.execute(entries.len(), |index| {
            let entry = &entries[index];
            let result = match source(entry) {
                Err(message) => Err(ItemError::Source(message)),
                Ok(mut package) => {
                    if let Some(dims) = entry.dimensions {
                        package = package.with_dimensions(dims);
                    }
                    calculator.calculate(&package).map_err(ItemError::from)
                }
            };
            if let Err(e) = &result {
                log::warn!("package {} failed: {e}", entry.tracking_number);
            }
            BatchItem {
                index,
                tracking_number: entry.tracking_number.clone(),
                result,
            }
        })
    }

    // ── Execution strategies ──────────────────────────────────────────────

    #[cfg(feature = "parallel")]
    fn execute<W>(&self, count: usize, work: W) -> BatchReport
    where
        W: Fn(usize) -> BatchItem + Send + Sync,
    {
        use rayon::prelude::*;

        // A dedicated pool caps in-flight geocoding/API calls at exactly
        // `concurrency`, independent of the global Rayon pool size.
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.concurrency)
            .build();

        let mut items: Vec<BatchItem> = match pool {
            Ok(pool) => pool.install(|| (0..count).into_par_iter().map(&work).collect()),
            Err(e) => {
                // Pool construction failing (thread limits) degrades to
                // sequential execution rather than aborting the batch.
                log::warn!("thread pool unavailable ({e}), running sequentially");
                (0..count).map(&work).collect()
            }
        };

        items.sort_by_key(|item| item.index);
        self.finish(items)
    }

    #[cfg(not(feature = "parallel"))]
    fn execute<W>(&self, count: usize, work: W) -> BatchReport
    where
        W: Fn(usize) -> BatchItem + Send + Sync,
    {
        let items: Vec<BatchItem> = (0..count).map(work).collect();
        self.finish(items)
    }

    fn finish(&self, items: Vec<BatchItem>) -> BatchReport {
        let report = BatchReport { items };
        let summary = report.summary();
        log::info!(
            "batch complete: {}/{} succeeded ({} failed)",
            summary.succeeded,
            summary.total,
            summary.failed
        );
        report
    }
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CONCURRENCY)
    }
}
