#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::Instant;
#[cfg(feature = "cli")]
use sysinfo::{Pid, System};

/// Phases of a recommendation run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Extract,
    Transform,
    Load,
}

impl RunPhase {
    fn label(self) -> &'static str {
        match self {
            RunPhase::Extract => "extract",
            RunPhase::Transform => "transform",
            RunPhase::Load => "load",
        }
    }
}

/// Samples this process's CPU and memory after each run phase. Disabled
/// monitors skip sampling entirely so the default path stays free of
/// sysinfo refresh cost.
#[cfg(feature = "cli")]
pub struct RunMonitor {
    sampler: Option<Mutex<Sampler>>,
    started: Instant,
}

#[cfg(feature = "cli")]
struct Sampler {
    system: System,
    pid: Pid,
    peak_memory_mb: u64,
}

#[cfg(feature = "cli")]
struct PhaseStats {
    cpu_usage: f32,
    memory_mb: u64,
    peak_memory_mb: u64,
}

#[cfg(feature = "cli")]
impl RunMonitor {
    pub fn new(enabled: bool) -> Self {
        let sampler = enabled.then(|| {
            let mut system = System::new();
            system.refresh_all();
            Mutex::new(Sampler {
                system,
                pid: sysinfo::get_current_pid().expect("current process has a pid"),
                peak_memory_mb: 0,
            })
        });

        Self {
            sampler,
            started: Instant::now(),
        }
    }

    fn sample(&self) -> Option<PhaseStats> {
        let mut guard = self.sampler.as_ref()?.lock().ok()?;
        let sampler = &mut *guard;

        sampler.system.refresh_all();
        let process = sampler.system.process(sampler.pid)?;
        let cpu_usage = process.cpu_usage();
        let memory_mb = process.memory() / 1024 / 1024;

        sampler.peak_memory_mb = sampler.peak_memory_mb.max(memory_mb);

        Some(PhaseStats {
            cpu_usage,
            memory_mb,
            peak_memory_mb: sampler.peak_memory_mb,
        })
    }

    pub fn log_phase(&self, phase: RunPhase) {
        if let Some(stats) = self.sample() {
            tracing::info!(
                "{} done: cpu {:.1}%, memory {} MB (peak {} MB), elapsed {:?}",
                phase.label(),
                stats.cpu_usage,
                stats.memory_mb,
                stats.peak_memory_mb,
                self.started.elapsed()
            );
        }
    }

    pub fn log_summary(&self) {
        if let Some(stats) = self.sample() {
            tracing::info!(
                "run finished in {:?}, peak memory {} MB",
                self.started.elapsed(),
                stats.peak_memory_mb
            );
        }
    }
}

// No-op stand-in when built without the cli feature.
#[cfg(not(feature = "cli"))]
pub struct RunMonitor;

#[cfg(not(feature = "cli"))]
impl RunMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_phase(&self, _phase: RunPhase) {}

    pub fn log_summary(&self) {}
}
