use crate::error::{Result, WorkoutError};
use crate::summary::Summary;

pub const M_IN_KM: f64 = 1000.0;
pub const MINUTES_IN_HOUR: f64 = 60.0;

/// Meters covered by one step.
pub const STEP_LENGTH: f64 = 0.65;
/// Meters covered by one swimming stroke.
pub const STROKE_LENGTH: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Fields shared by every discipline.
///
/// On its own this is the generic training: distance and speed use the
/// default step length, calories have no formula.
#[derive(Debug, Clone, PartialEq)]
pub struct Training {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
}

impl Training {
    /// Fails with [`WorkoutError::InvalidDuration`] unless `duration` is a
    /// finite number of hours above zero.
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(WorkoutError::InvalidDuration(duration));
        }
        Ok(Self {
            action,
            duration,
            weight,
        })
    }

    pub fn distance(&self) -> f64 {
        self.distance_with(STEP_LENGTH)
    }

    pub fn mean_speed(&self) -> f64 {
        self.distance() / self.duration
    }

    pub fn calories(&self) -> Result<f64> {
        Err(WorkoutError::UnsupportedOperation {
            operation: "calories",
        })
    }

    fn distance_with(&self, step_length: f64) -> f64 {
        f64::from(self.action) * step_length / M_IN_KM
    }

    fn minutes(&self) -> f64 {
        self.duration * MINUTES_IN_HOUR
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Discipline {
    Running,
    Walking { height: f64 },
    Swimming { pool_length: f64, lap_count: u32 },
}

impl Discipline {
    pub const fn step_length(&self) -> f64 {
        match self {
            Self::Running | Self::Walking { .. } => STEP_LENGTH,
            Self::Swimming { .. } => STROKE_LENGTH,
        }
    }

    /// Name printed in the summary line.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking { .. } => "SportsWalking",
            Self::Swimming { .. } => "Swimming",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    base: Training,
    discipline: Discipline,
}

impl Workout {
    pub fn running(action: u32, duration: f64, weight: f64) -> Result<Self> {
        Ok(Self {
            base: Training::new(action, duration, weight)?,
            discipline: Discipline::Running,
        })
    }

    /// Fails with [`WorkoutError::InvalidHeight`] unless `height` is finite
    /// and above zero.
    pub fn walking(action: u32, duration: f64, weight: f64, height: f64) -> Result<Self> {
        if !height.is_finite() || height <= 0.0 {
            return Err(WorkoutError::InvalidHeight(height));
        }
        Ok(Self {
            base: Training::new(action, duration, weight)?,
            discipline: Discipline::Walking { height },
        })
    }

    pub fn swimming(
        action: u32,
        duration: f64,
        weight: f64,
        pool_length: f64,
        lap_count: u32,
    ) -> Result<Self> {
        Ok(Self {
            base: Training::new(action, duration, weight)?,
            discipline: Discipline::Swimming {
                pool_length,
                lap_count,
            },
        })
    }

    pub const fn training(&self) -> &Training {
        &self.base
    }

    pub const fn discipline(&self) -> Discipline {
        self.discipline
    }

    pub const fn name(&self) -> &'static str {
        self.discipline.name()
    }

    /// Kilometers covered, from the action count and the discipline's step length.
    pub fn distance(&self) -> f64 {
        self.base.distance_with(self.discipline.step_length())
    }

    /// Average speed in km/h. Swimming derives it from the pool geometry and
    /// ignores the stroke count.
    pub fn mean_speed(&self) -> f64 {
        match self.discipline {
            Discipline::Swimming {
                pool_length,
                lap_count,
            } => pool_length * f64::from(lap_count) / M_IN_KM / self.base.duration,
            Discipline::Running | Discipline::Walking { .. } => {
                self.distance() / self.base.duration
            }
        }
    }

    pub fn calories(&self) -> f64 {
        let weight = self.base.weight;
        let speed = self.mean_speed();

        match self.discipline {
            Discipline::Running => {
                (RUN_SPEED_MULTIPLIER * speed - RUN_SPEED_SHIFT) * weight / M_IN_KM
                    * self.base.minutes()
            }
            Discipline::Walking { height } => {
                // Floored quotient, kept as in the reference calorie model.
                let speed_per_height = (speed.powi(2) / height).floor();
                (WALK_WEIGHT_MULTIPLIER * weight
                    + speed_per_height * WALK_SPEED_HEIGHT_MULTIPLIER * weight)
                    * self.base.minutes()
            }
            Discipline::Swimming { .. } => {
                (speed + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * weight
            }
        }
    }

    pub fn summarize(&self) -> Summary {
        Summary {
            training_type: self.name().to_string(),
            duration: self.base.duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.calories(),
        }
    }
}
