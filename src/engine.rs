//! Fleet rating orchestration.
//!
//! [`RatingEngine`] runs the full rating pass over a fleet: ingestion checks,
//! drone rating, camera rating, net and gross summaries and, on request, the
//! operational-capacity adjustment. The input fleet is never modified; the
//! result is a new [`RatedFleet`].

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::calculation::{
    CAMERA_HULL_RATE_DECIMALS, HULL_FINAL_RATE_DECIMALS, PremiumField, RateUnit, TPL_ILF_DECIMALS,
    TPL_LAYER_PREMIUM_DECIMALS, camera_hull_premium, camera_hull_rate, gross_up, guard,
    hull_base_rate, hull_final_rate, hull_premium, hull_weight_adjustment, limited_cameras_in_use,
    limited_drones_in_use, premium_grand_total, total_net, tpl_base_layer_premium, tpl_base_rate,
    tpl_ilf, tpl_layer_premium, validate_fleet,
};
use crate::config::{ConfigLoader, RateParameters};
use crate::error::EngineResult;
use crate::models::{
    Camera, CameraRating, Drone, DroneRating, Fleet, PremiumSummary, RatedCamera, RatedDrone,
    RatedFleet,
};

/// Per-call switches for a rating pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingOptions {
    /// Charge items beyond `max_drones_in_air` the flat grounded premium.
    #[serde(default)]
    pub apply_adjustments: bool,
}

impl RatingOptions {
    /// Options that apply the operational-capacity adjustment.
    pub fn with_adjustments() -> Self {
        Self {
            apply_adjustments: true,
        }
    }
}

/// Rates fleets against one set of rate parameters.
///
/// The parameters are shared read-only, so an engine can be cloned cheaply
/// and used from several threads at once.
///
/// # Example
///
/// ```no_run
/// use uav_rating_engine::config::ConfigLoader;
/// use uav_rating_engine::engine::{RatingEngine, RatingOptions};
/// use uav_rating_engine::models::Fleet;
///
/// let loader = ConfigLoader::load("./config/rates.yaml").unwrap();
/// let engine = RatingEngine::from_loader(loader);
///
/// let fleet: Fleet = serde_json::from_str(r#"{
///     "drones": [{"value": 10000, "weight": "0 - 5kg", "has_detachable_camera": true,
///                 "tpl_limit": 1000000, "tpl_excess": 0}],
///     "detachable_cameras": [{"value": 5000}],
///     "brokerage": 0.3,
///     "max_drones_in_air": 1
/// }"#).unwrap();
///
/// let rated = engine.rate_fleet(&fleet, RatingOptions::default()).unwrap();
/// println!("Gross premium: {}", rated.gross_prem.total);
/// ```
#[derive(Debug, Clone)]
pub struct RatingEngine {
    params: Arc<RateParameters>,
}

impl RatingEngine {
    /// Creates an engine that owns `params`.
    ///
    /// Fails with `InvalidConfig` when the parameters do not pass
    /// [`RateParameters::validate`].
    pub fn new(params: RateParameters) -> EngineResult<Self> {
        Self::from_shared(Arc::new(params))
    }

    /// Creates an engine over parameters already shared elsewhere.
    pub fn from_shared(params: Arc<RateParameters>) -> EngineResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Creates an engine from loaded rate parameters.
    ///
    /// Infallible: the loader only holds parameters that passed validation.
    pub fn from_loader(loader: ConfigLoader) -> Self {
        Self {
            params: Arc::new(loader.into_parameters()),
        }
    }

    /// Returns the rate parameters this engine rates with.
    pub fn parameters(&self) -> &RateParameters {
        &self.params
    }

    /// Computes every derived field for one drone.
    ///
    /// Rates are published in percent: the hull final rate rounded to one
    /// decimal, the ILF to two decimals and the layer premium to whole units.
    /// The layer premium is computed from the unrounded ILF.
    pub fn rate_drone(&self, drone: &Drone) -> EngineResult<RatedDrone> {
        let params = self.parameters();
        let value = drone.value;
        let band = drone.weight_band;

        let rating = DroneRating {
            hull_base_rate: hull_base_rate(params, value, RateUnit::Percentage)?,
            hull_weight_adjustment: hull_weight_adjustment(params, value, band)?,
            hull_final_rate: hull_final_rate(params, value, band, RateUnit::Percentage)?
                .map(|rate| rate.round_dp(HULL_FINAL_RATE_DECIMALS)),
            hull_premium: hull_premium(params, value, band)?,
            tpl_base_rate: tpl_base_rate(params, value, RateUnit::Percentage)?,
            tpl_base_layer_premium: tpl_base_layer_premium(params, value)?,
            tpl_ilf: tpl_ilf(params, value, drone.tpl_limit, drone.tpl_excess)?
                .map(|ilf| ilf.round_dp(TPL_ILF_DECIMALS)),
            tpl_layer_premium: tpl_layer_premium(params, value, drone.tpl_limit, drone.tpl_excess)?
                .map(|premium| premium.round_dp(TPL_LAYER_PREMIUM_DECIMALS)),
        };

        debug!(
            serial_number = drone.serial_number.as_deref().unwrap_or(""),
            value = %value,
            weight = %band,
            not_applicable = rating.is_not_applicable(),
            "Rated drone"
        );

        Ok(RatedDrone {
            drone: drone.clone(),
            rating,
        })
    }

    /// Prices one camera at the fleet-wide camera rate, given in percent.
    pub fn rate_camera(
        &self,
        camera: &Camera,
        rate_as_percentage: Decimal,
    ) -> EngineResult<RatedCamera> {
        let value = camera.value;
        Ok(RatedCamera {
            camera: camera.clone(),
            rating: CameraRating {
                hull_rate: guard(value, || rate_as_percentage.round_dp(CAMERA_HULL_RATE_DECIMALS)),
                hull_premium: camera_hull_premium(rate_as_percentage, value)?,
            },
        })
    }

    /// Rates every camera in the fleet.
    ///
    /// A fleet without cameras needs no camera rate, so it never fails with
    /// `NoEligibleDrone`.
    pub fn rate_cameras(&self, fleet: &Fleet) -> EngineResult<Vec<RatedCamera>> {
        if fleet.detachable_cameras.is_empty() {
            return Ok(Vec::new());
        }

        let rate = camera_hull_rate(self.parameters(), &fleet.drones, RateUnit::Percentage)?;
        fleet
            .detachable_cameras
            .iter()
            .map(|camera| self.rate_camera(camera, rate))
            .collect()
    }

    /// Rates a whole fleet.
    ///
    /// # Arguments
    ///
    /// * `fleet` - The fleet input document
    /// * `options` - Whether to apply the operational-capacity adjustment
    ///
    /// # Returns
    ///
    /// The rated fleet with net and gross summaries. Summaries are taken from
    /// the rating pass, before any capacity adjustment.
    pub fn rate_fleet(&self, fleet: &Fleet, options: RatingOptions) -> EngineResult<RatedFleet> {
        let start_time = Instant::now();
        let params = self.parameters();

        validate_fleet(params, fleet)?;

        let drones = fleet
            .drones
            .iter()
            .map(|drone| self.rate_drone(drone))
            .collect::<EngineResult<Vec<_>>>()?;
        let cameras = self.rate_cameras(fleet)?;

        let net_prem = net_summary(&drones, &cameras)?;
        let gross_prem = gross_summary(&net_prem, fleet)?;

        let (drones, cameras) = if options.apply_adjustments {
            (
                limited_drones_in_use(params, drones, fleet.max_drones_in_air),
                limited_cameras_in_use(params, cameras, fleet.max_drones_in_air),
            )
        } else {
            (drones, cameras)
        };

        info!(
            drones_count = drones.len(),
            cameras_count = cameras.len(),
            net_total = %net_prem.total,
            gross_total = %gross_prem.total,
            adjusted = options.apply_adjustments,
            duration_us = start_time.elapsed().as_micros(),
            "Fleet rated"
        );

        Ok(RatedFleet {
            drones,
            detachable_cameras: cameras,
            brokerage: fleet.brokerage,
            max_drones_in_air: fleet.max_drones_in_air,
            net_prem,
            gross_prem,
        })
    }

    /// Rates independent fleets in parallel.
    ///
    /// Results are returned in input order; one failing fleet does not affect
    /// the others.
    pub fn rate_fleets(
        &self,
        fleets: &[Fleet],
        options: RatingOptions,
    ) -> Vec<EngineResult<RatedFleet>> {
        fleets
            .par_iter()
            .enumerate()
            .map(|(index, fleet)| {
                self.rate_fleet(fleet, options).inspect_err(|err| {
                    warn!(fleet_index = index, error = %err, "Fleet rating failed");
                })
            })
            .collect()
    }
}

fn net_summary(drones: &[RatedDrone], cameras: &[RatedCamera]) -> EngineResult<PremiumSummary> {
    let drones_hull = total_net(drones, PremiumField::HullPremium)?;
    let drones_tpl = total_net(drones, PremiumField::TplLayerPremium)?;
    let cameras_hull = total_net(cameras, PremiumField::HullPremium)?;

    Ok(PremiumSummary {
        drones_hull,
        drones_tpl,
        cameras_hull,
        total: premium_grand_total(&[drones_hull, drones_tpl, cameras_hull])?,
    })
}

fn gross_summary(net: &PremiumSummary, fleet: &Fleet) -> EngineResult<PremiumSummary> {
    let drones_hull = gross_up(net.drones_hull, fleet.brokerage)?;
    let drones_tpl = gross_up(net.drones_tpl, fleet.brokerage)?;
    let cameras_hull = gross_up(net.cameras_hull, fleet.brokerage)?;

    Ok(PremiumSummary {
        drones_hull,
        drones_tpl,
        cameras_hull,
        total: premium_grand_total(&[drones_hull, drones_tpl, cameras_hull])?,
    })
}
