use thiserror::Error;

/// Shape of the active-material particle.
///
/// The numeric geometry parameter `g` is 0 for a plate, 1 for a cylinder,
/// and 2 for a sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Geometry {
    Planar,
    Cylindrical,
    Spherical,
}

/// Errors that can occur when decoding a geometry parameter.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("geometry parameter must be 0, 1, or 2, got {0}")]
    Unknown(f64),
}

impl Geometry {
    /// Decodes the numeric geometry parameter `g ∈ {0, 1, 2}`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Unknown`] for any other value.
    #[allow(clippy::float_cmp)]
    pub fn from_param(g: f64) -> Result<Self, GeometryError> {
        match g {
            _ if g == 0.0 => Ok(Self::Planar),
            _ if g == 1.0 => Ok(Self::Cylindrical),
            _ if g == 2.0 => Ok(Self::Spherical),
            _ => Err(GeometryError::Unknown(g)),
        }
    }

    /// Returns the numeric geometry parameter `g`.
    #[must_use]
    pub fn param(self) -> f64 {
        match self {
            Self::Planar => 0.0,
            Self::Cylindrical => 1.0,
            Self::Spherical => 2.0,
        }
    }

    /// Returns the shape factor `z = g + 1` used to place experiments on the map.
    #[must_use]
    pub fn shape_factor(self) -> f64 {
        self.param() + 1.0
    }

    /// Returns the factor applied to `ℓ` in the particle size and to the
    /// surface-to-volume ratio of the discharge kernel.
    ///
    /// This is `g` for curved particles. A plate uses 1, since `g = 0` would
    /// collapse both the size and the area to zero.
    #[must_use]
    pub fn size_factor(self) -> f64 {
        match self {
            Self::Planar => 1.0,
            Self::Cylindrical | Self::Spherical => self.param(),
        }
    }

    /// Returns the coefficient `(g − 1)` of the curvature term in the radial stencil.
    #[must_use]
    pub fn curvature(self) -> f64 {
        self.param() - 1.0
    }
}

impl TryFrom<f64> for Geometry {
    type Error = GeometryError;

    fn try_from(g: f64) -> Result<Self, Self::Error> {
        Self::from_param(g)
    }
}
