use crate::common::*;
use crate::enums::output_format::*;
use crate::model::chart::{
    combo_chart_spec::*, labeled_line_chart_spec::*, line_chart_spec::*,
};
use crate::traits::service_traits::chart_service::*;
use crate::utils_modules::{font_utils::*, pdf_utils::*, tick_utils::*};
use plotters::coord::Shift;
use plotters::prelude::*;

const LINE_COLOR: RGBColor = RGBColor(0, 0, 255);
const COST_COLOR: RGBColor = RGBColor(31, 119, 180);
const TIME_COLOR: RGBColor = RGBColor(214, 39, 40);
const GRID_COLOR: RGBColor = RGBColor(176, 176, 176);
const AXIS_COLOR: RGBColor = RGBColor(60, 60, 60);

/* Charts with more categories than this only label every n-th one */
const MAX_CATEGORY_LABELS: usize = 12;

#[doc = "One chart ready to be drawn on any plotters backend"]
enum ChartDrawing {
    Line(LineChartSpec),
    Combo(ComboChartSpec),
    LabeledLine(LabeledLineChartSpec),
}

impl ChartDrawing {
    fn size(&self) -> (u32, u32) {
        match self {
            ChartDrawing::Line(spec) => *spec.size(),
            ChartDrawing::Combo(spec) => *spec.size(),
            ChartDrawing::LabeledLine(spec) => *spec.size(),
        }
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>) -> anyhow::Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        match self {
            ChartDrawing::Line(spec) => draw_line_chart(root, spec),
            ChartDrawing::Combo(spec) => draw_combo_chart(root, spec),
            ChartDrawing::LabeledLine(spec) => draw_labeled_line_chart(root, spec),
        }
    }
}

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    #[doc = "Create parent directory if it doesn't exist"]
    async fn prepare_output_dir(&self, output_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        Ok(())
    }

    #[doc = r#"
        Runs a drawing on a blocking worker and waits for it.

        `.png` paths are drawn on the bitmap backend. Every other format targets an
        in-memory SVG document, written as is for `.svg` paths and converted for `.pdf` paths.
    "#]
    async fn render(
        &self,
        caller: &str,
        output_path: &Path,
        drawing: ChartDrawing,
    ) -> anyhow::Result<()> {
        let format: OutputFormat = OutputFormat::from_path(output_path)?;

        /* Text layout of every backend needs the registered chart font */
        chart_fonts().with_context(|| {
            format!("[ChartServiceImpl->{}] chart text needs an installed font", caller)
        })?;

        self.prepare_output_dir(output_path).await?;

        let output_path_buf: PathBuf = output_path.to_path_buf();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                /* ---- synchronous plotters code from here on ---- */
                let size: (u32, u32) = drawing.size();

                if format == OutputFormat::Png {
                    let root = BitMapBackend::new(&output_path_buf, size).into_drawing_area();
                    drawing.draw(&root)?;
                    root.present()?;
                    return Ok(());
                }

                let mut svg: String = String::new();
                {
                    let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
                    drawing.draw(&root)?;
                    root.present()?;
                }

                match format {
                    OutputFormat::Pdf => fs::write(&output_path_buf, svg_to_pdf(&svg)?)?,
                    _ => fs::write(&output_path_buf, svg.as_bytes())?,
                }

                Ok(())
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.with_context(|| {
            format!(
                "[ChartServiceImpl->{}] blocking task join failed (panic/cancelled)",
                caller
            )
        })?;

        drawing_result
            .with_context(|| format!("[ChartServiceImpl->{}] drawing/present failed", caller))?;

        info!("Chart generated successfully: {:?}", output_path);

        Ok(())
    }
}

fn bold_font(size: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Bold)
}

fn plain_font(size: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal)
}

#[doc = "Label of the category drawn at `x`, empty between categories"]
fn category_label(categories: &[String], x: f64) -> String {
    let index: f64 = x.round();

    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }

    categories
        .get(index as usize)
        .cloned()
        .unwrap_or_default()
}

#[doc = "Category positions that carry a label"]
fn category_ticks(count: usize) -> Vec<f64> {
    let step: usize = count.div_ceil(MAX_CATEGORY_LABELS).max(1);
    (0..count).step_by(step).map(|i| i as f64).collect()
}

fn draw_line_chart<DB>(root: &DrawingArea<DB, Shift>, spec: &LineChartSpec) -> anyhow::Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let (x_min, x_max) = spec.x_range()?;
    let (y_min, y_max) = spec.y_range()?;
    let x_axis: TickedAxis = TickedAxis::new(x_min, x_max, spec.x_ticks()?);
    let y_axis: TickedAxis = TickedAxis::new(y_min, y_max, spec.y_ticks()?);

    /* Dashed grid on every tick, drawn under the series */
    let grid_lines: Vec<[(f64, f64); 2]> = x_axis
        .ticks()
        .iter()
        .map(|&x| [(x, y_min), (x, y_max)])
        .chain(y_axis.ticks().iter().map(|&y| [(x_min, y), (x_max, y)]))
        .collect();

    let mut chart = ChartBuilder::on(root)
        .caption(spec.title(), bold_font(14.0))
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_axis, y_axis)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(spec.x_desc())
        .y_desc(spec.y_desc())
        .axis_desc_style(bold_font(12.0))
        .label_style(plain_font(12.0))
        .axis_style(ShapeStyle::from(&AXIS_COLOR).stroke_width(1))
        .x_label_formatter(&|x| format_tick(*x))
        .y_label_formatter(&|y| format_tick(*y))
        .draw()?;

    for line in grid_lines {
        chart.draw_series(DashedLineSeries::new(
            line.into_iter(),
            4,
            3,
            GRID_COLOR.mix(0.7).stroke_width(1),
        ))?;
    }

    chart.draw_series(LineSeries::new(
        spec.points().iter().copied(),
        LINE_COLOR.stroke_width(1),
    ))?;

    chart.draw_series(
        spec.points()
            .iter()
            .map(|&point| Circle::new(point, 2, LINE_COLOR.filled())),
    )?;

    Ok(())
}

fn draw_combo_chart<DB>(root: &DrawingArea<DB, Shift>, spec: &ComboChartSpec) -> anyhow::Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let count: usize = spec.categories().len();
    let x_min: f64 = -0.5;
    let x_max: f64 = count as f64 - 0.5;
    let x_ticks: Vec<f64> = category_ticks(count);

    /* Bars grow from zero, so the cost axis always starts there */
    let bar_max: f64 = spec.bar_values().iter().copied().fold(0.0, f64::max);
    let bar_top: f64 = if bar_max > 0.0 { bar_max * 1.1 } else { 1.0 };
    let (line_min, line_max) = padded_range(spec.line_values())?;

    let mut chart = ChartBuilder::on(root)
        .margin(12)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .right_y_label_area_size(80)
        .build_cartesian_2d(
            TickedAxis::new(x_min, x_max, x_ticks.clone()),
            TickedAxis::new(0.0, bar_top, nice_ticks(0.0, bar_top, 6)),
        )?
        .set_secondary_coord(
            TickedAxis::new(x_min, x_max, x_ticks),
            TickedAxis::new(line_min, line_max, nice_ticks(line_min, line_max, 6)),
        );

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(spec.x_desc())
        .y_desc(spec.bar_desc())
        .axis_desc_style(plain_font(16.0))
        .x_label_style(plain_font(12.0))
        .y_label_style(plain_font(12.0).color(&COST_COLOR))
        .axis_style(ShapeStyle::from(&AXIS_COLOR).stroke_width(1))
        .x_label_formatter(&|x| category_label(spec.categories(), *x))
        .y_label_formatter(&|y| format_tick(*y))
        .draw()?;

    chart
        .configure_secondary_axes()
        .y_desc(spec.line_desc())
        .axis_desc_style(plain_font(16.0))
        .label_style(plain_font(12.0).color(&TIME_COLOR))
        .axis_style(ShapeStyle::from(&AXIS_COLOR).stroke_width(1))
        .y_label_formatter(&|y| format_tick(*y))
        .draw()?;

    chart
        .draw_series(spec.bar_values().iter().enumerate().map(|(i, &value)| {
            let x: f64 = i as f64;
            Rectangle::new([(x - 0.4, 0.0), (x + 0.4, value)], COST_COLOR.filled())
        }))?
        .label(spec.bar_label())
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 14, y + 5)], COST_COLOR.filled()));

    chart
        .draw_secondary_series(DashedLineSeries::new(
            spec.line_values()
                .iter()
                .enumerate()
                .map(|(i, &value)| (i as f64, value)),
            6,
            4,
            TIME_COLOR.stroke_width(2),
        ))?
        .label(spec.line_label())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 14, y)], TIME_COLOR.stroke_width(2)));

    chart.draw_secondary_series(
        spec.line_values()
            .iter()
            .enumerate()
            .map(|(i, &value)| Circle::new((i as f64, value), 4, TIME_COLOR.filled())),
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .margin(15)
        .label_font(plain_font(14.0))
        .background_style(WHITE.mix(0.8))
        .border_style(GRID_COLOR)
        .draw()?;

    Ok(())
}

fn draw_labeled_line_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    spec: &LabeledLineChartSpec,
) -> anyhow::Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let count: usize = spec.x_labels().len();
    let x_min: f64 = -0.5;
    let x_max: f64 = count as f64 - 0.5;
    let (y_min, y_max) = padded_range(spec.y_data())?;

    let mut chart = ChartBuilder::on(root)
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(
            TickedAxis::new(x_min, x_max, category_ticks(count)),
            TickedAxis::new(y_min, y_max, nice_ticks(y_min, y_max, 8)),
        )?;

    chart
        .configure_mesh()
        .label_style(plain_font(12.0))
        .axis_style(ShapeStyle::from(&AXIS_COLOR).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
        .x_label_formatter(&|x| category_label(spec.x_labels(), *x))
        .y_label_formatter(&|y| format_tick(*y))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            spec.y_data()
                .iter()
                .enumerate()
                .map(|(i, &value)| (i as f64, value)),
            COST_COLOR.stroke_width(2),
        ))?
        .label(spec.line_label())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 14, y)], COST_COLOR.stroke_width(2)));

    chart.draw_series(
        spec.y_data()
            .iter()
            .enumerate()
            .map(|(i, &value)| Circle::new((i as f64, value), 3, COST_COLOR.filled())),
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperMiddle)
        .label_font(plain_font(12.0))
        .background_style(WHITE.mix(0.8))
        .draw()?;

    Ok(())
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn generate_line_chart(
        &self,
        spec: LineChartSpec,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        spec.validate()?;

        self.render("generate_line_chart", output_path, ChartDrawing::Line(spec))
            .await
    }

    async fn generate_combo_chart(
        &self,
        spec: ComboChartSpec,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        spec.validate()?;

        self.render("generate_combo_chart", output_path, ChartDrawing::Combo(spec))
            .await
    }

    async fn generate_labeled_line_chart(
        &self,
        spec: LabeledLineChartSpec,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        spec.validate()?;

        self.render("generate_labeled_line_chart", output_path, ChartDrawing::LabeledLine(spec))
            .await
    }
}
