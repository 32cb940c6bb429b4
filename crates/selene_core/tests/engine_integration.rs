//! Engine behaviour across epochs, observers and threads.

use std::sync::Arc;

use selene_core::*;

fn engine() -> Engine {
    Engine::new(EngineConfig::default()).expect("default config is valid")
}

fn reykjavik() -> GeoLocation {
    GeoLocation::new(64.1466, -21.9426, 20.0)
}

#[test]
fn fixed_instant_is_deterministic() {
    let eng = engine();
    let obs = Observer::new(reykjavik(), UtcTime::new(2024, 12, 24, 18, 0, 0.0));
    let a = eng.moon_alt_az(&obs).unwrap();
    let b = eng.moon_alt_az(&obs).unwrap();
    assert_eq!(a, b);
}

#[test]
fn outputs_stay_in_range_over_a_month() {
    let eng = engine();
    for hour in (0..24 * 30).step_by(5) {
        let time = UtcTime::from_jd_utc(2_460_676.5 + hour as f64 / 24.0);
        for loc in [
            reykjavik(),
            GeoLocation::new(-90.0, 0.0, 0.0),
            GeoLocation::new(0.0, 180.0, 0.0),
        ] {
            let h = eng.moon_alt_az(&Observer::new(loc, time)).unwrap();
            assert!((-90.0..=90.0).contains(&h.altitude_deg), "alt = {}", h.altitude_deg);
            assert!((0.0..360.0).contains(&h.azimuth_deg), "az = {}", h.azimuth_deg);
        }
    }
}

#[test]
fn year_2300_is_ephemeris_unavailable() {
    let obs = Observer::new(reykjavik(), UtcTime::from_date(2300, 1, 1));
    match engine().moon_alt_az(&obs) {
        Err(EngineError::EphemerisUnavailable { body, jd_tt }) => {
            assert_eq!(body, Body::Moon);
            assert!(jd_tt > ANALYTIC_RANGE_END_JD);
        }
        other => panic!("expected EphemerisUnavailable, got {other:?}"),
    }
}

#[test]
fn nineteenth_century_resolves_through_delta_t() {
    let obs = Observer::new(reykjavik(), UtcTime::from_date(1850, 1, 1));
    assert!(engine().moon_alt_az(&obs).is_ok());
}

#[test]
fn refraction_lifts_a_low_moon() {
    let time = UtcTime::from_date(2025, 1, 1);
    let seoul = GeoLocation::new(37.5665, 126.978, 38.0);
    let obs = Observer::new(seoul, time);

    let plain = engine().moon_alt_az(&obs).unwrap();
    let refracting = Engine::new(EngineConfig {
        refraction: Some(RefractionModel::default()),
        ..EngineConfig::default()
    })
    .unwrap();
    let lifted = refracting.moon_alt_az(&obs).unwrap();

    // Near the horizon refraction is roughly half a degree.
    let lift = lifted.altitude_deg - plain.altitude_deg;
    assert!((0.2..0.8).contains(&lift), "lift = {lift}");
}

#[test]
fn dut1_shifts_azimuth_slightly() {
    let obs = Observer::new(reykjavik(), UtcTime::new(2024, 3, 20, 12, 0, 0.0));
    let a = engine().moon_alt_az(&obs).unwrap();
    let b = Engine::new(EngineConfig {
        dut1_s: 0.9,
        ..EngineConfig::default()
    })
    .unwrap()
    .moon_alt_az(&obs)
    .unwrap();
    // 0.9 s of Earth rotation is 0.00376°, the sky can move at most that much.
    let d_alt = (a.altitude_deg - b.altitude_deg).abs();
    let d_az = ((a.azimuth_deg - b.azimuth_deg + 180.0).rem_euclid(360.0) - 180.0).abs();
    assert!(d_alt > 0.0 || d_az > 0.0);
    assert!(d_alt < 0.004, "Δalt = {d_alt}");
}

#[test]
fn custom_ephemeris_is_used() {
    struct Fixed;
    impl Ephemeris for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }
        fn supported_range_jd(&self) -> (f64, f64) {
            (0.0, f64::MAX)
        }
        fn geocentric(&self, _body: Body, _jd_tt: f64) -> Result<SphericalCoords, EngineError> {
            // Ecliptic north pole, far away: altitude equals the latitude
            // of the ecliptic pole seen from the observer, always finite.
            Ok(SphericalCoords::new(0.0, 90.0, 1.0e9))
        }
    }

    let eng = Engine::with_ephemeris(EngineConfig::default(), Box::new(Fixed)).unwrap();
    assert_eq!(eng.ephemeris().name(), "fixed");
    let pole = GeoLocation::new(90.0, 0.0, 0.0);
    let p = eng
        .apparent(Body::Moon, &Observer::new(pole, UtcTime::from_date(2024, 1, 1)))
        .unwrap();
    // From the north pole, altitude is the declination: 90° − ε.
    assert!((p.horizontal.altitude_deg - (90.0 - 23.436)).abs() < 0.01);
}

#[test]
fn shared_across_threads() {
    let eng = Arc::new(engine());
    let time = UtcTime::new(2024, 3, 20, 12, 0, 0.0);
    let expected = eng.moon_alt_az(&Observer::new(reykjavik(), time)).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let eng = Arc::clone(&eng);
            std::thread::spawn(move || eng.moon_alt_az(&Observer::new(reykjavik(), time)))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap().unwrap(), expected);
    }
}
