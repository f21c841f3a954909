use crate::body::Body;

/// Mean Keplerian elements at the J2000 reference epoch.
///
/// Angles are in degrees, the semi-major axis in AU, the period in days.
/// The Moon carries only the subset its dedicated series uses;
/// `semi_major_axis_au` is `None` for it, which keeps it off the planet
/// solve path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub period_days: f64,
    pub semi_major_axis_au: Option<f64>,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub longitude_ascending_node_deg: f64,
    pub argument_periapsis_deg: f64,
    pub mean_anomaly_at_epoch_deg: f64,
}

/// Static element table; the Sun has no entry (it is the origin of the
/// model) and the Moon's entry is partial.
pub(crate) fn elements_for(body: Body) -> Option<OrbitalElements> {
    let el = match body {
        Body::Sun => return None,
        Body::Moon => OrbitalElements {
            period_days: 27.321661,
            semi_major_axis_au: None,
            eccentricity: 0.0549,
            inclination_deg: 5.145,
            longitude_ascending_node_deg: 0.0,
            argument_periapsis_deg: 0.0,
            mean_anomaly_at_epoch_deg: 0.0,
        },
        Body::Mercury => OrbitalElements {
            period_days: 87.969,
            semi_major_axis_au: Some(0.387),
            eccentricity: 0.2056,
            inclination_deg: 7.005,
            longitude_ascending_node_deg: 48.331,
            argument_periapsis_deg: 29.124,
            mean_anomaly_at_epoch_deg: 174.796,
        },
        Body::Venus => OrbitalElements {
            period_days: 224.701,
            semi_major_axis_au: Some(0.723),
            eccentricity: 0.0067,
            inclination_deg: 3.395,
            longitude_ascending_node_deg: 76.680,
            argument_periapsis_deg: 54.884,
            mean_anomaly_at_epoch_deg: 50.115,
        },
        Body::Mars => OrbitalElements {
            period_days: 686.980,
            semi_major_axis_au: Some(1.524),
            eccentricity: 0.0934,
            inclination_deg: 1.850,
            longitude_ascending_node_deg: 49.558,
            argument_periapsis_deg: 286.502,
            mean_anomaly_at_epoch_deg: 19.373,
        },
        Body::Jupiter => OrbitalElements {
            period_days: 4332.590,
            semi_major_axis_au: Some(5.204),
            eccentricity: 0.0489,
            inclination_deg: 1.303,
            longitude_ascending_node_deg: 100.464,
            argument_periapsis_deg: 273.867,
            mean_anomaly_at_epoch_deg: 20.020,
        },
        Body::Saturn => OrbitalElements {
            period_days: 10759.22,
            semi_major_axis_au: Some(9.537),
            eccentricity: 0.0565,
            inclination_deg: 2.485,
            longitude_ascending_node_deg: 113.665,
            argument_periapsis_deg: 339.392,
            mean_anomaly_at_epoch_deg: 317.020,
        },
        Body::Uranus => OrbitalElements {
            period_days: 30688.5,
            semi_major_axis_au: Some(19.2),
            eccentricity: 0.0457,
            inclination_deg: 0.772,
            longitude_ascending_node_deg: 74.006,
            argument_periapsis_deg: 96.998857,
            mean_anomaly_at_epoch_deg: 142.2386,
        },
        Body::Neptune => OrbitalElements {
            period_days: 60182.0,
            semi_major_axis_au: Some(30.05),
            eccentricity: 0.0113,
            inclination_deg: 1.767,
            longitude_ascending_node_deg: 131.784,
            argument_periapsis_deg: 276.336,
            mean_anomaly_at_epoch_deg: 256.228,
        },
    };
    Some(el)
}
