use fitcalc::{Package, Training, WorkoutError, process_packages, read_package, sample_packages};

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_swimming_scenario() {
    let w = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])
        .unwrap()
        .expect("SWM is a known code");

    assert_close(w.distance(), 0.9936);
    assert_close(w.mean_speed(), 1.0);
    assert_close(w.calories(), 336.0);
}

#[test]
fn test_running_scenario() {
    let w = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap().unwrap();

    assert_close(w.distance(), 9.75);
    assert_close(w.mean_speed(), 9.75);
    assert_close(w.calories(), (18.0 * 9.75 - 20.0) * 75.0 / 1000.0 * 60.0);
    assert_close(w.calories(), 699.75);
}

#[test]
fn test_walking_scenario() {
    let w = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap().unwrap();

    assert_close(w.distance(), 5.85);
    assert_close(w.mean_speed(), 5.85);
    assert_close(w.calories(), 157.5);
}

#[test]
fn test_sample_run_messages() {
    let lines: Vec<String> = process_packages(&sample_packages())
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(
        lines,
        [
            "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
             Mean speed: 1.000 km/h; Calories burned: 336.000.",
            "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Mean speed: 9.750 km/h; Calories burned: 699.750.",
            "Training type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; \
             Mean speed: 5.850 km/h; Calories burned: 157.500.",
        ]
    );
}

#[test]
fn test_error_cases() {
    assert_eq!(read_package("XYZ", &[1.0, 1.0, 1.0]), Ok(None));

    assert!(matches!(
        read_package("RUN", &[15000.0, 1.0, 75.0, 25.0, 40.0]),
        Err(WorkoutError::ArityMismatch {
            code: "RUN",
            expected: 3,
            got: 5
        })
    ));

    assert!(matches!(
        Training::new(15000, 1.0, 75.0).unwrap().calories(),
        Err(WorkoutError::UnsupportedOperation { .. })
    ));

    assert!(matches!(
        read_package("WLK", &[9000.0, -1.0, 75.0, 180.0]),
        Err(WorkoutError::InvalidDuration(_))
    ));

    assert_eq!(
        read_package("WLK", &[20000.0, 1.0, 60.0, 0.0]),
        Err(WorkoutError::InvalidHeight(0.0))
    );
}

#[test]
fn test_bad_package_aborts_run() {
    let packages = [
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0]),
    ];
    assert!(matches!(
        process_packages(&packages),
        Err(WorkoutError::ArityMismatch { expected: 4, .. })
    ));
}
