use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::mem;
use std::process::Child;

/// Identifies a background job within a session.
///
/// Identifiers start at 1 and increase monotonically. An identifier is never
/// reused within a session, not even after its job has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JobId(pub usize);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tracked background process.
pub struct Job {
    id: JobId,
    pid: u32,
    child: Child,
    description: String,
}

impl Job {
    /// Returns the job's identifier.
    pub fn id(&self) -> JobId {
        self.id
    }

    /// Returns the tracked process's OS identifier.
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Returns the command line the job was started from.
    pub fn description(&self) -> &str {
        &self.description
    }

    fn summary(&self) -> JobSummary {
        JobSummary {
            id: self.id,
            pid: self.pid,
            description: self.description.clone(),
        }
    }

    /// Consumes the job, dropping its process handle.
    fn into_summary(self) -> JobSummary {
        JobSummary {
            id: self.id,
            pid: self.pid,
            description: self.description,
        }
    }
}

/// Point-in-time information about a job, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    /// The job's identifier.
    pub id: JobId,

    /// The tracked process's OS identifier.
    pub pid: u32,

    /// The command line the job was started from.
    pub description: String,
}

/// Errors related to background job management.
#[derive(Debug)]
pub enum JobError {
    /// No job with the given id exists in the table.
    NotFound(JobId),

    /// The OS refused to terminate the job's process.
    TerminateFailed(JobId, io::Error),
}

impl fmt::Display for JobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobError::NotFound(id) => write!(f, "job {id} not found"),
            JobError::TerminateFailed(id, error) => {
                write!(f, "failed to terminate job {id}: {error}")
            }
        }
    }
}

/// Registry of background jobs.
///
/// The table owns the process handle of every job it tracks. A handle is
/// closed exactly once: when a completed job is reaped by [`JobTable::poll`],
/// when a job is waited for in the foreground, or when a job is terminated.
/// Handles remaining in a dropped table are closed without terminating their
/// processes, which continue past the end of the session.
pub struct JobTable {
    next_id: usize,
    jobs: BTreeMap<JobId, Job>,
    finished: Vec<JobSummary>,
}

impl JobTable {
    /// Constructs an empty job table.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            jobs: BTreeMap::new(),
            finished: Vec::new(),
        }
    }

    /// Registers a child process as a background job, returning the newly
    /// allocated job identifier.
    ///
    /// Never blocks.
    pub fn register(&mut self, child: Child, description: String) -> JobId {
        let id = JobId(self.next_id);
        self.next_id += 1;

        let job = Job {
            id,
            pid: child.id(),
            child,
            description,
        };
        self.jobs.insert(id, job);
        id
    }

    /// Checks every running job for termination without blocking.
    ///
    /// Terminated jobs leave the running set and queue a single completion
    /// report for [`JobTable::take_finished`]. A job whose liveness can no
    /// longer be determined is treated as terminated.
    pub fn poll(&mut self) {
        let mut exited = Vec::new();
        for (id, job) in &mut self.jobs {
            if !matches!(job.child.try_wait(), Ok(None)) {
                exited.push(*id);
            }
        }

        for id in exited {
            if let Some(job) = self.jobs.remove(&id) {
                self.finished.push(job.into_summary());
            }
        }
    }

    /// Takes all queued completion reports.
    ///
    /// Each completed job is reported exactly once across all calls.
    pub fn take_finished(&mut self) -> Vec<JobSummary> {
        mem::take(&mut self.finished)
    }

    /// Returns a snapshot of the running jobs in ascending id order.
    ///
    /// Polls first, so completed entries are never listed.
    pub fn list(&mut self) -> Vec<JobSummary> {
        self.poll();
        self.jobs.values().map(Job::summary).collect()
    }

    /// Returns a running job by id.
    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.get(&id)
    }

    /// Blocks until the job's process terminates, then removes the job.
    ///
    /// The entry is removed even if waiting fails, and a job reaped this way
    /// never produces a completion report.
    pub fn bring_to_foreground(&mut self, id: JobId) -> Result<(), JobError> {
        let mut job = self.jobs.remove(&id).ok_or(JobError::NotFound(id))?;
        let _ = job.child.wait(); // Results are safe to ignore.
        Ok(())
    }

    /// Forcibly terminates the job's process.
    ///
    /// The entry is removed on success. On failure the entry is retained, so
    /// the operation can be retried.
    pub fn terminate(&mut self, id: JobId) -> Result<(), JobError> {
        let mut job = self.jobs.remove(&id).ok_or(JobError::NotFound(id))?;
        match job.child.kill() {
            Ok(()) => {
                let _ = job.child.wait(); // Reap the terminated process.
                Ok(())
            }
            Err(error) => {
                let failure = JobError::TerminateFailed(id, error);
                self.jobs.insert(id, job);
                Err(failure)
            }
        }
    }

    /// Returns the number of running jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Returns `true` if no job is running.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl Default for JobTable {
    fn default() -> Self {
        Self::new()
    }
}
