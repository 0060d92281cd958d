//! TOML description of a whole run, in user units.
//!
//! ```toml
//! temperature_k = 298.0
//! mass_g = 1.0
//! density_g_per_cm3 = 4.28
//! cutoff_voltage_v = -0.15
//! specific_capacity_mah_per_g = 148.0
//! geometry = 2.0
//!
//! [model]
//! kind = "analytic"
//! g_pot = 0.0
//!
//! [discretization]
//! grid_size = 1000
//! time_steps = 100000
//!
//! [map]
//! log_ell = [-2.0, -1.0, 0.0]
//! log_xi = [-1.0, 0.0, 1.0]
//! workers = -1
//!
//! [profile]
//! log_ell = -1.0
//! log_xi = 1.0
//! target_soc = 0.5
//! sample_count = 100
//! ```
//!
//! A tabulated model replaces the `[model]` section with the spline
//! coefficients of each segment:
//!
//! ```toml
//! [model]
//! kind = "tabulated"
//! breakpoints = [0.0, 0.5, 1.0]
//! a = [0.0, 0.0]
//! b = [0.0, 0.0]
//! c = [-1.0, -1.0]
//! d = [1.0, 0.5]
//! ```

use galva_core::{
    CellParameters, DimensionlessPoint, Frumkin, Geometry, IsothermTable, PotentialModel,
};
use galva_solvers::{
    discharge::Config,
    sweep::{Grid, Workers},
};
use serde::Deserialize;
use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Mass, MassDensity, ThermodynamicTemperature},
    mass::gram,
    mass_density::gram_per_cubic_centimeter,
    thermodynamic_temperature::kelvin,
};

use crate::{Error, MapRequest, ProfileRequest};

/// A deserialized run description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub temperature_k: f64,
    pub mass_g: f64,
    pub density_g_per_cm3: f64,
    pub cutoff_voltage_v: f64,
    pub specific_capacity_mah_per_g: f64,

    /// Geometry parameter: 0 planar, 1 cylindrical, 2 spherical.
    pub geometry: f64,

    pub model: ModelConfig,

    #[serde(default)]
    pub discretization: DiscretizationConfig,

    pub map: Option<MapConfig>,
    pub profile: Option<ProfileConfig>,
}

/// Equilibrium potential model selection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
pub enum ModelConfig {
    Analytic {
        g_pot: f64,
    },
    Tabulated {
        breakpoints: Vec<f64>,
        a: Vec<f64>,
        b: Vec<f64>,
        c: Vec<f64>,
        d: Vec<f64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscretizationConfig {
    pub grid_size: usize,
    pub time_steps: usize,

    /// Step budget; twice `time_steps` when absent.
    pub max_steps: Option<usize>,
}

impl Default for DiscretizationConfig {
    fn default() -> Self {
        let config = Config::default();
        Self {
            grid_size: config.grid_size(),
            time_steps: config.time_steps(),
            max_steps: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapConfig {
    pub log_ell: Vec<f64>,
    pub log_xi: Vec<f64>,

    /// Worker-count hint, `-1` for all hardware threads.
    #[serde(default = "all_workers")]
    pub workers: i64,
}

fn all_workers() -> i64 {
    -1
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    pub log_ell: f64,
    pub log_xi: f64,
    pub target_soc: f64,
    pub sample_count: usize,
}

impl RunConfig {
    /// Parses a run description from TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or does not match the
    /// expected layout.
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    /// Builds the validated cell parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry parameter is not 0, 1, or 2, or if a
    /// cell quantity is out of range.
    pub fn cell(&self) -> Result<CellParameters, Error> {
        let cell = CellParameters::new(
            ThermodynamicTemperature::new::<kelvin>(self.temperature_k),
            Mass::new::<gram>(self.mass_g),
            MassDensity::new::<gram_per_cubic_centimeter>(self.density_g_per_cm3),
            ElectricPotential::new::<volt>(self.cutoff_voltage_v),
            self.specific_capacity_mah_per_g,
            Geometry::try_from(self.geometry)?,
        )?;
        Ok(cell)
    }

    /// Builds the equilibrium potential model for `cell`.
    ///
    /// # Errors
    ///
    /// Returns an error if a tabulated model's arrays are malformed.
    pub fn model(&self, cell: &CellParameters) -> Result<PotentialModel, Error> {
        let model = match &self.model {
            ModelConfig::Analytic { g_pot } => {
                Frumkin::new(*g_pot, cell.thermal_voltage()).into()
            }
            ModelConfig::Tabulated {
                breakpoints,
                a,
                b,
                c,
                d,
            } => IsothermTable::new(
                breakpoints.clone(),
                a.clone(),
                b.clone(),
                c.clone(),
                d.clone(),
            )?
            .into(),
        };
        Ok(model)
    }

    /// Builds the discharge solver configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a count is too small.
    pub fn discharge_config(&self) -> Result<Config, Error> {
        let settings = &self.discretization;
        let config = Config::new(settings.grid_size, settings.time_steps)?;
        match settings.max_steps {
            Some(max_steps) => Ok(config.with_max_steps(max_steps)?),
            None => Ok(config),
        }
    }

    /// Builds a diagnostic map request from the `[map]` section.
    ///
    /// # Errors
    ///
    /// Returns an error if the section is missing or any input is invalid.
    pub fn map_request(&self) -> Result<MapRequest, Error> {
        let map = self.map.as_ref().ok_or(Error::MissingSection("map"))?;
        let cell = self.cell()?;

        Ok(MapRequest {
            model: self.model(&cell)?,
            cell,
            grid: Grid::new(map.log_ell.clone(), map.log_xi.clone())?,
            config: self.discharge_config()?,
            workers: Workers::from_hint(map.workers)?,
        })
    }

    /// Builds a single-point profile request from the `[profile]` section.
    ///
    /// # Errors
    ///
    /// Returns an error if the section is missing or any input is invalid.
    pub fn profile_request(&self) -> Result<ProfileRequest, Error> {
        let profile = self.profile.ok_or(Error::MissingSection("profile"))?;
        let cell = self.cell()?;

        Ok(ProfileRequest {
            model: self.model(&cell)?,
            cell,
            point: DimensionlessPoint::new(profile.log_ell, profile.log_xi),
            config: self.discharge_config()?,
            sample_count: profile.sample_count,
            target_soc: profile.target_soc,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use galva_core::{EquilibriumPotential, GeometryError};

    const ANALYTIC: &str = r#"
        temperature_k = 298.0
        mass_g = 1.0
        density_g_per_cm3 = 4.28
        cutoff_voltage_v = -0.15
        specific_capacity_mah_per_g = 148.0
        geometry = 2.0

        [model]
        kind = "analytic"
        g_pot = 0.5

        [discretization]
        grid_size = 60
        time_steps = 3000

        [map]
        log_ell = [-2.0, -1.0]
        log_xi = [0.0, 1.0, 2.0]

        [profile]
        log_ell = -1.0
        log_xi = 1.0
        target_soc = 0.5
        sample_count = 100
    "#;

    const TABULATED: &str = r#"
        temperature_k = 300.0
        mass_g = 2.0
        density_g_per_cm3 = 4.0
        cutoff_voltage_v = 0.2
        specific_capacity_mah_per_g = 150.0
        geometry = 0.0

        [model]
        kind = "tabulated"
        breakpoints = [0.0, 0.5, 1.0]
        a = [0.0, 0.0]
        b = [0.0, 0.0]
        c = [-1.0, -1.0]
        d = [1.0, 0.5]

        [discretization]
        grid_size = 30
        time_steps = 2000
        max_steps = 5000
    "#;

    #[test]
    fn parses_analytic_run() {
        let config = RunConfig::from_toml_str(ANALYTIC).expect("valid config");

        assert_eq!(config.model, ModelConfig::Analytic { g_pot: 0.5 });
        assert_eq!(config.map.as_ref().map(|m| m.workers), Some(-1));

        let map = config.map_request().expect("map request");
        assert_eq!(map.grid.len(), 6);
        assert_eq!(map.workers, Workers::All);
        assert_eq!(map.config.grid_size(), 60);
        assert_eq!(map.config.max_steps(), 6000);
        assert_eq!(map.cell.geometry(), Geometry::Spherical);

        let profile = config.profile_request().expect("profile request");
        assert_eq!(profile.point, DimensionlessPoint::new(-1.0, 1.0));
        assert_eq!(profile.sample_count, 100);
        assert_relative_eq!(profile.target_soc, 0.5);
        assert!(matches!(profile.model, PotentialModel::Analytic(f) if f.interaction() == 0.5));
    }

    #[test]
    fn parses_tabulated_run() {
        let config = RunConfig::from_toml_str(TABULATED).expect("valid config");

        let cell = config.cell().expect("valid cell");
        assert_eq!(cell.geometry(), Geometry::Planar);

        let model = config.model(&cell).expect("valid model");
        assert_relative_eq!(model.potential(0.25), 0.75, epsilon = 1e-12);
        assert_relative_eq!(model.potential(0.75), 0.25, epsilon = 1e-12);

        let discharge = config.discharge_config().expect("valid discretization");
        assert_eq!(discharge.max_steps(), 5000);

        assert!(matches!(
            config.map_request(),
            Err(Error::MissingSection("map"))
        ));
        assert!(matches!(
            config.profile_request(),
            Err(Error::MissingSection("profile"))
        ));
    }

    #[test]
    fn discretization_defaults_when_absent() {
        let text = ANALYTIC.replace("grid_size = 60\n", "").replace("time_steps = 3000\n", "");
        let config = RunConfig::from_toml_str(&text).expect("valid config");

        let discharge = config.discharge_config().expect("valid discretization");
        assert_eq!(discharge, Config::default());
    }

    #[test]
    fn rejects_invalid_inputs() {
        let bad_geometry = ANALYTIC.replace("geometry = 2.0", "geometry = 3.0");
        let config = RunConfig::from_toml_str(&bad_geometry).expect("parses");
        assert!(matches!(
            config.cell(),
            Err(Error::Geometry(GeometryError::Unknown(_)))
        ));

        let bad_workers = ANALYTIC.replace("log_xi = [0.0, 1.0, 2.0]", "log_xi = [0.0]\nworkers = 0");
        let config = RunConfig::from_toml_str(&bad_workers).expect("parses");
        assert!(matches!(config.map_request(), Err(Error::Sweep(_))));

        let bad_mass = ANALYTIC.replace("mass_g = 1.0", "mass_g = -1.0");
        let config = RunConfig::from_toml_str(&bad_mass).expect("parses");
        assert!(matches!(config.cell(), Err(Error::Cell(_))));

        let unknown_kind = ANALYTIC.replace("kind = \"analytic\"", "kind = \"polynomial\"");
        assert!(matches!(
            RunConfig::from_toml_str(&unknown_kind),
            Err(Error::Config(_))
        ));

        let bad_table = TABULATED.replace("a = [0.0, 0.0]", "a = [0.0]");
        let config = RunConfig::from_toml_str(&bad_table).expect("parses");
        let cell = config.cell().expect("valid cell");
        assert!(matches!(config.model(&cell), Err(Error::Isotherm(_))));
    }
}
