use lazy_static::lazy_static;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::Level;
use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_timing::{Builder, Histogram};
use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;
use std::time::{Duration, Instant};

// Upper bound of one minute, in nanoseconds
const HISTOGRAM_MAX_NS: u64 = 60_000_000_000;
const HISTOGRAM_SIGFIGS: u8 = 3;

// Define categories for different types of operations
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum OperationCategory {
    Calculation {
        subcategory: CalculationType,
    },
    FileIO {
        subcategory: FileIOType,
    },
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum CalculationType {
    Balancer,
    Roadmap,
    Charts,
    Scenarios,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum FileIOType {
    InputLoad,
    CsvExport,
    JsonExport,
}

impl OperationCategory {
    pub fn as_str(&self) -> String {
        match self {
            OperationCategory::Calculation { subcategory } => {
                format!("Calculation - {}", match subcategory {
                    CalculationType::Balancer => "Area Balancer",
                    CalculationType::Roadmap => "Roadmap",
                    CalculationType::Charts => "Chart Series",
                    CalculationType::Scenarios => "Scenario Variants",
                })
            },
            OperationCategory::FileIO { subcategory } => {
                format!("File I/O - {}", match subcategory {
                    FileIOType::InputLoad => "Input Load",
                    FileIOType::CsvExport => "CSV Export",
                    FileIOType::JsonExport => "JSON Export",
                })
            },
        }
    }
}

lazy_static! {
    static ref TIMING_ENABLED: AtomicBool = AtomicBool::new(false);
    static ref FUNCTION_TIMINGS: Arc<RwLock<HashMap<String, (Duration, usize)>>> = Arc::new(RwLock::new(HashMap::new()));
    static ref CATEGORY_TIMINGS: Arc<RwLock<HashMap<OperationCategory, Histogram<u64>>>> = Arc::new(RwLock::new(HashMap::new()));
}

/// Records the elapsed time of the enclosing scope when dropped.
pub struct TimingGuard {
    function_name: &'static str,
    category: OperationCategory,
    start: Instant,
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        record_timing(self.function_name, self.start.elapsed(), &self.category);
    }
}

pub fn start_timing(function_name: &'static str, category: OperationCategory) -> TimingGuard {
    TimingGuard {
        function_name,
        category,
        start: Instant::now(),
    }
}

fn record_timing(function_name: &str, duration: Duration, category: &OperationCategory) {
    if !is_timing_enabled() {
        return;
    }

    {
        let mut timings = FUNCTION_TIMINGS.write();
        let entry = timings
            .entry(function_name.to_string())
            .or_insert((Duration::from_nanos(0), 0));
        entry.0 += duration;
        entry.1 += 1;
    }

    let mut category_timings = CATEGORY_TIMINGS.write();
    if !category_timings.contains_key(category) {
        match Histogram::<u64>::new_with_bounds(1, HISTOGRAM_MAX_NS, HISTOGRAM_SIGFIGS) {
            Ok(histogram) => {
                category_timings.insert(category.clone(), histogram);
            },
            Err(e) => {
                tracing::warn!("Could not create timing histogram: {:?}", e);
                return;
            },
        }
    }
    if let Some(histogram) = category_timings.get_mut(category) {
        let duration_ns = (duration.as_nanos() as u64).clamp(1, HISTOGRAM_MAX_NS);
        let _ = histogram.record(duration_ns);
    }
}

pub fn init_logging(enable_timing: bool, debug_logging: bool) -> anyhow::Result<()> {
    TIMING_ENABLED.store(enable_timing, Ordering::SeqCst);

    let level = if debug_logging { "seqcalc=debug" } else { "seqcalc=info" };
    let env_filter = EnvFilter::from_default_env()
        .add_directive(Level::INFO.into())
        .add_directive(level.parse()?);

    if enable_timing {
        let histogram = || {
            Histogram::<u64>::new_with_bounds(1, HISTOGRAM_MAX_NS, HISTOGRAM_SIGFIGS)
                .expect("static histogram bounds are valid")
        };

        let timing_layer = Builder::default().layer(histogram);

        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .with(timing_layer.boxed());

        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty());

        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}

pub fn is_timing_enabled() -> bool {
    TIMING_ENABLED.load(Ordering::SeqCst)
}

pub fn print_timing_report() {
    if !is_timing_enabled() {
        return;
    }

    println!("\nPerformance Report");
    println!("==================");

    println!("\nBy Function:");
    println!("------------");
    let timings = FUNCTION_TIMINGS.read();
    let mut entries: Vec<_> = timings.iter().collect();
    entries.sort_by(|a, b| b.1.0.cmp(&a.1.0));

    for (function_name, (total_duration, count)) in entries {
        let avg_duration = total_duration.div_f64(*count as f64);
        println!(
            "{}: total={:.3}ms, count={}, avg={:.3}ms",
            function_name,
            total_duration.as_secs_f64() * 1000.0,
            count,
            avg_duration.as_secs_f64() * 1000.0,
        );
    }

    println!("\nBy Category:");
    println!("------------");
    let category_timings = CATEGORY_TIMINGS.read();
    let mut category_vec: Vec<_> = category_timings.iter().collect();
    category_vec.sort_by(|a, b| {
        b.1.mean().partial_cmp(&a.1.mean()).unwrap_or(std::cmp::Ordering::Equal)
    });

    for (category, histogram) in category_vec {
        println!(
            "{}: mean={:.3}ms, p95={:.3}ms, count={}",
            category.as_str(),
            histogram.mean() / 1_000_000.0,
            histogram.value_at_quantile(0.95) as f64 / 1_000_000.0,
            histogram.len(),
        );
    }

    println!("==================\n");
}
