use crate::dlog;
use crate::error::{Result, WorkoutError};
use crate::package::Package;
use crate::summary::Summary;
use crate::types::Workout;
use std::fmt;
use std::str::FromStr;

/// Type code carried by a sensor package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutCode {
    Swimming,
    Running,
    Walking,
}

impl WorkoutCode {
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::Walking];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::Walking => "WLK",
        }
    }

    /// Number of positional values the package must carry.
    pub const fn arity(self) -> usize {
        match self {
            Self::Swimming => 5,
            Self::Running => 3,
            Self::Walking => 4,
        }
    }

    /// Binds `args` positionally into the matching constructor.
    pub fn build(self, args: &[f64]) -> Result<Workout> {
        if args.len() != self.arity() {
            return Err(WorkoutError::ArityMismatch {
                code: self.as_str(),
                expected: self.arity(),
                got: args.len(),
            });
        }

        let action = whole_count("action", args[0])?;
        let (duration, weight) = (args[1], args[2]);

        match self {
            Self::Running => Workout::running(action, duration, weight),
            Self::Walking => Workout::walking(action, duration, weight, args[3]),
            Self::Swimming => {
                let lap_count = whole_count("lap_count", args[4])?;
                Workout::swimming(action, duration, weight, args[3], lap_count)
            }
        }
    }
}

impl FromStr for WorkoutCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| WorkoutError::UnknownWorkoutType(s.to_string()))
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the workout for a sensor package.
///
/// An unknown code yields `Ok(None)`; a known code with the wrong number of
/// values is an [`WorkoutError::ArityMismatch`].
pub fn read_package(code: &str, args: &[f64]) -> Result<Option<Workout>> {
    let Ok(code) = code.parse::<WorkoutCode>() else {
        dlog!("unknown_workout_code code={code:?}");
        return Ok(None);
    };
    dlog!("dispatch code={code} args={}", args.len());
    code.build(args).map(Some)
}

/// Summaries for every package with a known code, in input order.
///
/// Packages with an unknown code are skipped with a warning. The first
/// construction error aborts the run.
pub fn process_packages(packages: &[Package]) -> Result<Vec<Summary>> {
    let mut out = Vec::with_capacity(packages.len());

    for p in packages {
        match read_package(&p.code, &p.data)? {
            Some(workout) => out.push(workout.summarize()),
            None => tracing::warn!(code = %p.code, "skipping package with unknown workout type"),
        }
    }

    Ok(out)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_count(field: &'static str, value: f64) -> Result<u32> {
    let whole = value.is_finite() && value.fract() == 0.0;
    if whole && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidCount { field, value })
    }
}
