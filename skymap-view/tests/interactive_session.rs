//! End-to-end walk through a chart session: load a catalog, look
//! around, follow things, and run simulated time.

use skymap_core::SkyCoordinate;
use skymap_ephemeris::Body;
use skymap_projection::{ProjectionCache, Viewport};
use skymap_time::Instant;
use skymap_view::{
    pick, plan_frame, Catalog, FollowTarget, PickTarget, PlaybackSpeed, TimeStep, ViewState,
    MAX_CLICK_DISTANCE,
};

const VP: Viewport = Viewport::new(800.0, 600.0);

fn load_catalog() -> Catalog {
    serde_json::from_str(
        r#"{
        "constellations": [{
            "name": "Orion",
            "stars": [
                { "name": "Betelgeuse", "ra": 5.9195, "dec": 7.4069,
                  "magnitude": 0.50, "id": "alpha" },
                { "name": "Rigel", "ra": 5.2422, "dec": -8.2017,
                  "magnitude": 0.13, "id": "beta" },
                { "name": "Bellatrix", "ra": 5.4188, "dec": 6.3497,
                  "magnitude": 1.64, "id": "gamma" }
            ],
            "lines": [["alpha", "gamma"], ["gamma", "beta"]]
        }],
        "stars": [
            { "name": "Sirius", "ra": 6.7525, "dec": -16.7161,
              "magnitude": -1.46 }
        ],
        "deep_sky": [
            { "name": "M42 (Orion Nebula)", "ra": 5.5889, "dec": -5.3911,
              "kind": "nebula", "magnitude": 4.0, "size": 6.0 },
            { "name": "M31 (Andromeda Galaxy)", "ra": 0.7125, "dec": 41.2689,
              "kind": "galaxy", "magnitude": 3.4, "size": 8.0 },
            { "name": "M8 (Lagoon Nebula)", "ra": 18.0635, "dec": -24.3803,
              "kind": "nebula", "magnitude": 6.0, "size": 5.0 }
        ]
    }"#,
    )
    .unwrap()
}

fn winter_evening() -> ViewState {
    let mut state = ViewState::new();
    state
        .set_date(Instant::new(2024, 1, 15, 21, 0, 0.0).unwrap())
        .unwrap();
    state.set_center(SkyCoordinate::new(5.5, 0.0));
    state
}

#[test]
fn a_full_session() {
    let catalog = load_catalog();
    let mut state = winter_evening();
    let mut cache = ProjectionCache::new();

    // Orion and (72 degrees out) Andromeda are on the near hemisphere;
    // the Lagoon Nebula at RA 18h is on the far side and culled
    let plan = plan_frame(&state, &catalog, &VP, &mut cache);
    assert!(plan.stars.iter().any(|s| s.name == "Betelgeuse"));
    assert_eq!(plan.lines.len(), 2);
    let deep_names: Vec<&str> = plan.deep_sky.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        deep_names,
        ["M42 (Orion Nebula)", "M31 (Andromeda Galaxy)"]
    );
    assert!(!plan.bodies.is_empty());

    // Double-click on Betelgeuse and lock onto it
    let betelgeuse = SkyCoordinate::new(5.9195, 7.4069);
    let click = skymap_projection::sky_to_screen(&betelgeuse, state.center(), state.zoom(), &VP)
        .unwrap();
    let picked = state.follow_at(&catalog, &click, &VP, MAX_CLICK_DISTANCE);
    assert!(matches!(picked, Some(PickTarget::Star { .. })));
    assert_eq!(state.center(), &betelgeuse);

    // Fixed targets hold the centre while time runs
    state.set_playback_speed(PlaybackSpeed::Day);
    state.play();
    state.advance(3.0);
    assert_eq!(state.center(), &betelgeuse);

    // A drag breaks the lock
    state.pan(25.0, -10.0, &VP);
    assert_eq!(state.follow(), &FollowTarget::Idle);

    // Follow the Moon instead; the centre now tracks the ephemeris
    state.follow_body(Body::Moon).unwrap();
    let moon_then = *state.center();
    state.advance(1.0);
    let moon_now = *state.center();
    assert_ne!(moon_then, moon_now);

    // Pluto is not a thing the chart knows
    assert!(state.follow_body_by_name("Pluto").is_err());
    assert_eq!(state.follow(), &FollowTarget::Body(Body::Moon));

    // Pause, rewind a month, and the Moon lock still recenters
    state.pause();
    let before_step = *state.center();
    state.step(TimeStep::Months(-1)).unwrap();
    assert_ne!(before_step, *state.center());
}

#[test]
fn picking_prefers_the_strictly_closest_object() {
    let catalog = load_catalog();
    let state = winter_evening();

    // Clicking dead on M42 picks the nebula even though stars are
    // scanned first; deep-sky wins by being strictly closer
    let m42 = SkyCoordinate::new(5.5889, -5.3911);
    let near_m42 = skymap_projection::sky_to_screen(&m42, state.center(), state.zoom(), &VP)
        .unwrap();
    let picked = pick(&state, &catalog, &near_m42, &VP, MAX_CLICK_DISTANCE).unwrap();
    assert!(matches!(picked, PickTarget::DeepSky { ref name, .. }
        if name == "M42 (Orion Nebula)"));
}

#[test]
fn zoomed_out_chart_is_consistent_between_cache_and_direct_projection() {
    let catalog = load_catalog();
    let mut state = winter_evening();
    state.set_zoom(0.1);

    let mut cache = ProjectionCache::new();
    let via_cache = plan_frame(&state, &catalog, &VP, &mut cache);

    for star in &via_cache.stars {
        let coord = if star.name == "Sirius" {
            SkyCoordinate::new(6.7525, -16.7161)
        } else {
            continue;
        };
        let direct =
            skymap_projection::sky_to_screen(&coord, state.center(), state.zoom(), &VP).unwrap();
        assert_eq!(star.point, direct);
    }
}
