use crate::common::*;

use crate::utils_modules::tick_utils::*;

#[doc = "Time-series line chart: one series of (x, y) points"]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct LineChartSpec {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub points: Vec<(f64, f64)>,
    pub integer_y: bool,
    pub size: (u32, u32),
}

impl LineChartSpec {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.points.is_empty() {
            return Err(anyhow!(
                "[LineChartSpec->validate] Cannot generate chart '{}' with empty data",
                self.y_desc
            ));
        }

        Ok(())
    }

    pub fn x_values(&self) -> Vec<f64> {
        self.points.iter().map(|(x, _)| *x).collect()
    }

    pub fn y_values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, y)| *y).collect()
    }

    pub fn x_range(&self) -> anyhow::Result<(f64, f64)> {
        padded_range(&self.x_values())
    }

    #[doc = "Y range, widened to the integer ticks when those are requested"]
    pub fn y_range(&self) -> anyhow::Result<(f64, f64)> {
        let mut values: Vec<f64> = self.y_values();

        if self.integer_y {
            values.extend(integer_ticks(&values));
        }

        padded_range(&values)
    }

    pub fn x_ticks(&self) -> anyhow::Result<Vec<f64>> {
        let (x_min, x_max) = self.x_range()?;
        Ok(nice_ticks(x_min, x_max, 6))
    }

    pub fn y_ticks(&self) -> anyhow::Result<Vec<f64>> {
        if self.integer_y {
            return Ok(integer_ticks(&self.y_values()));
        }

        let (y_min, y_max) = self.y_range()?;
        Ok(nice_ticks(y_min, y_max, 8))
    }
}
