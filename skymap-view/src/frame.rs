//! Frame assembly and hit testing.
//!
//! [`plan_frame`] turns the current view state plus a catalog into the
//! flat lists an external renderer draws in one pass; no drawing happens
//! here. [`pick`] answers "what did the user click", in the same
//! screen-space terms.

use crate::catalog::{Catalog, DeepSkyKind};
use crate::state::ViewState;
use skymap_core::SkyCoordinate;
use skymap_ephemeris::Body;
use skymap_projection::{ProjectionCache, ScreenPoint, Viewport};

/// Default hit-test radius in pixels.
pub const MAX_CLICK_DISTANCE: f64 = 50.0;

/// A star placed on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedStar {
    pub name: String,
    pub point: ScreenPoint,
    pub magnitude: f64,
    /// Home constellation, if the star came from one.
    pub constellation: Option<String>,
}

/// A constellation stick-figure segment with both endpoints on the near
/// hemisphere.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub constellation: String,
    pub from: ScreenPoint,
    pub to: ScreenPoint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedDeepSky {
    pub name: String,
    pub kind: DeepSkyKind,
    pub point: ScreenPoint,
    pub magnitude: f64,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBody {
    pub body: Body,
    pub point: ScreenPoint,
}

/// Everything visible this frame, in draw order: lines under stars,
/// deep-sky under the solar system.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FramePlan {
    pub lines: Vec<LineSegment>,
    pub stars: Vec<PlacedStar>,
    pub deep_sky: Vec<PlacedDeepSky>,
    pub bodies: Vec<PlacedBody>,
}

/// Projects the whole catalog and solar system for the current view.
///
/// Culled objects are simply absent. A constellation segment appears
/// only when both of its endpoint stars are on the near hemisphere; a
/// segment with one visible end would otherwise shoot across the screen
/// toward the projection's unbounded rim.
pub fn plan_frame(
    state: &ViewState,
    catalog: &Catalog,
    viewport: &Viewport,
    cache: &mut ProjectionCache,
) -> FramePlan {
    let center = state.center();
    let zoom = state.zoom();
    let mut plan = FramePlan::default();

    for constellation in &catalog.constellations {
        for star in &constellation.stars {
            if let Some(point) = cache.project(&star.coord(), center, zoom, viewport) {
                plan.stars.push(PlacedStar {
                    name: star.name.clone(),
                    point,
                    magnitude: star.magnitude,
                    constellation: Some(constellation.name.clone()),
                });
            }
        }
        for (from_id, to_id) in &constellation.lines {
            let (Some(from), Some(to)) = (constellation.star(from_id), constellation.star(to_id))
            else {
                continue;
            };
            let from = cache.project(&from.coord(), center, zoom, viewport);
            let to = cache.project(&to.coord(), center, zoom, viewport);
            if let (Some(from), Some(to)) = (from, to) {
                plan.lines.push(LineSegment {
                    constellation: constellation.name.clone(),
                    from,
                    to,
                });
            }
        }
    }

    for star in &catalog.stars {
        if let Some(point) = cache.project(&star.coord(), center, zoom, viewport) {
            plan.stars.push(PlacedStar {
                name: star.name.clone(),
                point,
                magnitude: star.magnitude,
                constellation: None,
            });
        }
    }

    for object in &catalog.deep_sky {
        if let Some(point) = cache.project(&object.coord(), center, zoom, viewport) {
            plan.deep_sky.push(PlacedDeepSky {
                name: object.name.clone(),
                kind: object.kind,
                point,
                magnitude: object.magnitude,
                size: object.size,
            });
        }
    }

    for position in state.system().all_bodies(state.instant()) {
        if let Some(point) = cache.project(&position.coord, center, zoom, viewport) {
            plan.bodies.push(PlacedBody {
                body: position.body,
                point,
            });
        }
    }

    plan
}

/// The object nearest to a clicked point.
#[derive(Debug, Clone, PartialEq)]
pub enum PickTarget {
    Body(Body),
    Star { name: String, coord: SkyCoordinate },
    DeepSky { name: String, coord: SkyCoordinate },
}

/// Finds the nearest projectable object within `max_px` of `point`, or
/// `None` if nothing is that close. Solar-system bodies are checked
/// first; a star or deep-sky object wins only by being strictly closer.
pub fn pick(
    state: &ViewState,
    catalog: &Catalog,
    point: &ScreenPoint,
    viewport: &Viewport,
    max_px: f64,
) -> Option<PickTarget> {
    let center = state.center();
    let zoom = state.zoom();
    let mut closest: Option<PickTarget> = None;
    let mut closest_distance = max_px;

    let mut consider = |candidate: PickTarget, placed: Option<ScreenPoint>| {
        if let Some(placed) = placed {
            let distance = point.distance(&placed);
            if distance < closest_distance {
                closest_distance = distance;
                closest = Some(candidate);
            }
        }
    };

    for position in state.system().all_bodies(state.instant()) {
        consider(
            PickTarget::Body(position.body),
            skymap_projection::sky_to_screen(&position.coord, center, zoom, viewport),
        );
    }

    for constellation in &catalog.constellations {
        for star in &constellation.stars {
            consider(
                PickTarget::Star {
                    name: star.name.clone(),
                    coord: star.coord(),
                },
                skymap_projection::sky_to_screen(&star.coord(), center, zoom, viewport),
            );
        }
    }

    for star in &catalog.stars {
        consider(
            PickTarget::Star {
                name: star.name.clone(),
                coord: star.coord(),
            },
            skymap_projection::sky_to_screen(&star.coord(), center, zoom, viewport),
        );
    }

    for object in &catalog.deep_sky {
        consider(
            PickTarget::DeepSky {
                name: object.name.clone(),
                coord: object.coord(),
            },
            skymap_projection::sky_to_screen(&object.coord(), center, zoom, viewport),
        );
    }

    closest
}

impl ViewState {
    /// Double-click behavior: pick the nearest object and lock onto it.
    /// Returns the target now followed, or `None` when the click landed
    /// on empty sky (leaving the state unchanged).
    pub fn follow_at(
        &mut self,
        catalog: &Catalog,
        point: &ScreenPoint,
        viewport: &Viewport,
        max_px: f64,
    ) -> Option<PickTarget> {
        let target = pick(self, catalog, point, viewport, max_px)?;
        match &target {
            PickTarget::Body(body) => {
                // Position was just computed during the pick, so this
                // cannot fail for a valid instant; keep the lock on a
                // best-effort basis regardless.
                if let Err(err) = self.follow_body(*body) {
                    log::warn!("could not follow {body}: {err}");
                    return None;
                }
            }
            PickTarget::Star { name, coord } | PickTarget::DeepSky { name, coord } => {
                self.follow_fixed(name.clone(), *coord);
            }
        }
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Constellation, DeepSkyObject, Star};
    use crate::state::FollowTarget;
    use skymap_time::Instant;

    const VP: Viewport = Viewport::new(800.0, 600.0);

    fn star(name: &str, id: &str, ra: f64, dec: f64) -> Star {
        Star {
            name: name.into(),
            ra,
            dec,
            magnitude: 2.0,
            id: id.into(),
        }
    }

    fn test_catalog() -> Catalog {
        Catalog {
            constellations: vec![Constellation {
                name: "Orion".into(),
                stars: vec![
                    star("Betelgeuse", "alpha", 5.9195, 7.4069),
                    star("Rigel", "beta", 5.2422, -8.2017),
                    // Antipodal to the test view centre, never visible
                    star("Farside", "omega", 18.0, -7.0),
                ],
                lines: vec![
                    ("alpha".into(), "beta".into()),
                    ("alpha".into(), "omega".into()),
                    ("alpha".into(), "missing".into()),
                ],
            }],
            stars: vec![star("Sirius", "", 6.7525, -16.7161)],
            deep_sky: vec![DeepSkyObject {
                name: "M42".into(),
                ra: 5.5889,
                dec: -5.3911,
                kind: DeepSkyKind::Nebula,
                magnitude: 4.0,
                size: 6.0,
            }],
        }
    }

    fn orion_view() -> ViewState {
        let mut state = ViewState::new();
        state
            .set_date(Instant::new(2024, 1, 1, 12, 0, 0.0).unwrap())
            .unwrap();
        state.set_center(SkyCoordinate::new(6.0, 0.0));
        state
    }

    #[test]
    fn plan_places_visible_objects_and_culls_the_rest() {
        let state = orion_view();
        let mut cache = ProjectionCache::new();
        let plan = plan_frame(&state, &test_catalog(), &VP, &mut cache);

        let names: Vec<&str> = plan.stars.iter().map(|s| s.name.as_str()).collect();
        assert!(names.contains(&"Betelgeuse"));
        assert!(names.contains(&"Sirius"));
        assert!(!names.contains(&"Farside"));

        assert_eq!(plan.deep_sky.len(), 1);
        assert_eq!(plan.deep_sky[0].name, "M42");
    }

    #[test]
    fn lines_need_both_endpoints_visible() {
        let state = orion_view();
        let mut cache = ProjectionCache::new();
        let plan = plan_frame(&state, &test_catalog(), &VP, &mut cache);

        // alpha-beta survives; alpha-omega loses an endpoint to the far
        // hemisphere and alpha-missing has no second star at all
        assert_eq!(plan.lines.len(), 1);
        assert_eq!(plan.lines[0].constellation, "Orion");
    }

    #[test]
    fn constellation_stars_carry_their_home() {
        let state = orion_view();
        let mut cache = ProjectionCache::new();
        let plan = plan_frame(&state, &test_catalog(), &VP, &mut cache);

        let betelgeuse = plan
            .stars
            .iter()
            .find(|s| s.name == "Betelgeuse")
            .unwrap();
        assert_eq!(betelgeuse.constellation.as_deref(), Some("Orion"));

        let sirius = plan.stars.iter().find(|s| s.name == "Sirius").unwrap();
        assert_eq!(sirius.constellation, None);
    }

    #[test]
    fn plan_output_is_identical_with_a_cold_or_warm_cache() {
        let state = orion_view();
        let catalog = test_catalog();
        let mut cache = ProjectionCache::new();
        let cold = plan_frame(&state, &catalog, &VP, &mut cache);
        let warm = plan_frame(&state, &catalog, &VP, &mut cache);
        assert_eq!(cold, warm);
    }

    #[test]
    fn pick_finds_the_nearest_star() {
        let state = orion_view();
        let catalog = test_catalog();
        let target = skymap_projection::sky_to_screen(
            &SkyCoordinate::new(5.9195, 7.4069),
            state.center(),
            state.zoom(),
            &VP,
        )
        .unwrap();

        let picked = pick(&state, &catalog, &target, &VP, MAX_CLICK_DISTANCE).unwrap();
        assert_eq!(
            picked,
            PickTarget::Star {
                name: "Betelgeuse".into(),
                coord: SkyCoordinate::new(5.9195, 7.4069),
            }
        );
    }

    #[test]
    fn pick_respects_the_radius() {
        let state = orion_view();
        let catalog = test_catalog();
        // The far corner of the viewport is empty sky
        assert!(pick(&state, &catalog, &ScreenPoint::new(1.0, 1.0), &VP, 5.0).is_none());
    }

    #[test]
    fn follow_at_locks_onto_the_picked_star() {
        let mut state = orion_view();
        let catalog = test_catalog();
        let target = skymap_projection::sky_to_screen(
            &SkyCoordinate::new(5.9195, 7.4069),
            state.center(),
            state.zoom(),
            &VP,
        )
        .unwrap();

        let picked = state.follow_at(&catalog, &target, &VP, MAX_CLICK_DISTANCE);
        assert!(picked.is_some());
        assert_eq!(
            state.follow(),
            &FollowTarget::Fixed {
                name: "Betelgeuse".into(),
                coord: SkyCoordinate::new(5.9195, 7.4069),
            }
        );
        assert_eq!(state.center(), &SkyCoordinate::new(5.9195, 7.4069));
    }

    #[test]
    fn follow_at_on_empty_sky_changes_nothing() {
        let mut state = orion_view();
        let before = state.clone();
        let picked = state.follow_at(&test_catalog(), &ScreenPoint::new(1.0, 1.0), &VP, 5.0);
        assert!(picked.is_none());
        assert_eq!(state.center(), before.center());
        assert_eq!(state.follow(), before.follow());
    }
}
