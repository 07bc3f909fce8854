use bevy::prelude::*;
use clap::Parser;

use crate::mesh::lattice::Lattice;

/// Session parameters for the cloth simulation. All fixed for the lifetime
/// of the process; there is no hot-reload.
#[derive(Parser, Resource, Debug, Clone)]
#[command(
    version,
    about = "2D cloth/net simulation hanging between two draggable anchors",
    allow_negative_numbers = true
)]
pub struct SimConfig {
    /// Grid cells along the x axis.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    pub xcount: u32,

    /// Grid cells along the y axis.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    pub ycount: u32,

    /// Physical width of the cloth.
    #[arg(long, default_value_t = 200.0)]
    pub width: f32,

    /// Physical height of the cloth.
    #[arg(long, default_value_t = 100.0)]
    pub height: f32,

    /// X of the cloth's lower-left corner. Defaults to centering the cloth.
    #[arg(long)]
    pub origin_x: Option<f32>,

    /// Y of the cloth's lower-left corner. Defaults to centering the cloth.
    #[arg(long)]
    pub origin_y: Option<f32>,

    /// Build a rigid net (fixed-length rods) instead of a stretchy cloth.
    #[arg(long)]
    pub rigid: bool,

    /// Spring stiffness (elastic mode).
    #[arg(long, default_value_t = 5000.0)]
    pub stiffness: f32,

    /// Spring damping (elastic mode).
    #[arg(long, default_value_t = 300.0)]
    pub damping: f32,

    /// Gravity vector, x component.
    #[arg(long, default_value_t = 0.0)]
    pub gravity_x: f32,

    /// Gravity vector, y component.
    #[arg(long, default_value_t = -700.0)]
    pub gravity_y: f32,

    /// Mass of each cloth point.
    #[arg(long, default_value_t = 2.0)]
    pub point_mass: f32,

    /// Thickness of the drawn cloth polylines.
    #[arg(long, default_value_t = 4.0)]
    pub line_thickness: f32,
}

impl SimConfig {
    /// Fails fast on parameters clap's range checks cannot express. Runs
    /// before anything is spawned.
    pub fn validate(&self) -> Result<(), String> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(format!(
                "cloth extents must be positive, got {} x {}",
                self.width, self.height
            ));
        }
        if self.point_mass <= 0.0 {
            return Err(format!("point mass must be positive, got {}", self.point_mass));
        }
        if self.stiffness < 0.0 || self.damping < 0.0 {
            return Err("stiffness and damping must be non-negative".to_string());
        }
        if self.line_thickness <= 0.0 {
            return Err(format!(
                "line thickness must be positive, got {}",
                self.line_thickness
            ));
        }
        Ok(())
    }

    pub fn lattice(&self) -> Lattice {
        Lattice::new(self.xcount as usize, self.ycount as usize)
    }

    /// Lower-left corner of the cloth: explicit flags win, otherwise the
    /// cloth hangs centered a little below the camera origin.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(
            self.origin_x.unwrap_or(-self.width / 2.0),
            self.origin_y.unwrap_or(-self.height / 2.0 - 30.0),
        )
    }

    pub fn gravity(&self) -> Vec2 {
        Vec2::new(self.gravity_x, self.gravity_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_are_valid() {
        let config = SimConfig::parse_from(["clothnet"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.lattice().point_count(), 31 * 31);
    }

    #[test]
    fn non_positive_extents_are_rejected() {
        let config = SimConfig::parse_from(["clothnet", "--width=0"]);
        assert!(config.validate().is_err());
        let config = SimConfig::parse_from(["clothnet", "--height=-5"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_cell_counts_are_rejected_by_the_parser() {
        assert!(SimConfig::try_parse_from(["clothnet", "--xcount", "0"]).is_err());
        assert!(SimConfig::try_parse_from(["clothnet", "--ycount", "0"]).is_err());
    }
}
