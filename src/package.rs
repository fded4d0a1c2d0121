use crate::error::{Result, WorkoutError};

/// Raw sensor package: a type code and its positional values.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    /// Parse `CODE:n,n,...`, e.g. `RUN:15000,1,75`.
    pub fn parse(line: &str) -> Result<Self> {
        let Some((code, values)) = line.split_once(':') else {
            return Err(WorkoutError::InvalidPackage(format!(
                "expected CODE:values, got {line:?}"
            )));
        };

        let code = code.trim();
        if code.is_empty() {
            return Err(WorkoutError::InvalidPackage(format!(
                "missing type code in {line:?}"
            )));
        }

        let data = values
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| {
                v.parse::<f64>().map_err(|e| {
                    WorkoutError::InvalidPackage(format!("bad value {v:?} in {line:?}: {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(code, data))
    }
}

/// The three reference packages: one swim, one run, one walk.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
