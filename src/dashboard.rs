use crate::category::CategorySales;
use crate::city::CitySales;
use crate::error::{DashboardError, Result};
use crate::payment::PaymentSales;
use crate::product::ProductSales;
use crate::table::thousands;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use tracing::info;

const STEEL_BLUE: RGBColor = RGBColor(70, 130, 180);
const CORAL: RGBColor = RGBColor(255, 127, 80);
const LIGHT_GREEN: RGBColor = RGBColor(144, 238, 144);

const PIE_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// The four breakdowns drawn on the dashboard, already sorted.
pub struct DashboardData<'a> {
    pub categories: &'a [CategorySales],
    pub products: &'a [ProductSales],
    pub cities: &'a [CitySales],
    pub payments: &'a [PaymentSales],
    pub currency: &'a str,
}

fn chart_error(err: impl Display) -> DashboardError {
    DashboardError::Chart(err.to_string())
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Creates `dir` if needed; returns whether it was created.
pub fn ensure_output_dir(dir: &Path) -> Result<bool> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        info!(dir = %dir.display(), "output folder already exists");
        return Ok(false);
    }
    fs::create_dir_all(dir)?;
    info!(dir = %dir.display(), "output folder created");
    Ok(true)
}

/// Draws the 2x2 dashboard to `path`: an `.svg` extension selects the SVG
/// backend, anything else is encoded as a bitmap by extension (PNG for
/// the default file name).
pub fn render_dashboard(data: &DashboardData<'_>, path: &Path, size: (u32, u32)) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    if is_svg(path) {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw_dashboard(&root, data).map_err(chart_error)?;
        root.present().map_err(chart_error)?;
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw_dashboard(&root, data).map_err(chart_error)?;
        root.present().map_err(chart_error)?;
    }

    info!(path = %path.display(), width = size.0, height = size.1, "dashboard saved");
    Ok(())
}

pub fn draw_dashboard<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &DashboardData<'_>,
) -> DrawResult<(), DB> {
    root.fill(&WHITE)?;
    let root = root.titled(
        "Sales Analysis Dashboard",
        ("sans-serif", 32).into_font().style(FontStyle::Bold),
    )?;
    let panels = root.split_evenly((2, 2));
    let axis = format!("Total Sales ({})", data.currency);

    let categories: Vec<(&str, f64)> = data
        .categories
        .iter()
        .map(|r| (r.category.as_str(), r.total_sales))
        .collect();
    vertical_bars(&panels[0], "Sales by Category", &axis, &categories, STEEL_BLUE)?;

    let products: Vec<(&str, f64)> = data
        .products
        .iter()
        .map(|r| (r.product_name.as_str(), r.total_sales))
        .collect();
    horizontal_bars(&panels[1], "Top Products by Sales", &axis, &products, CORAL)?;

    let cities: Vec<(&str, f64)> = data
        .cities
        .iter()
        .map(|r| (r.city.as_str(), r.total_sales))
        .collect();
    vertical_bars(&panels[2], "Sales by City", &axis, &cities, LIGHT_GREEN)?;

    let payments: Vec<(&str, f64)> = data
        .payments
        .iter()
        .map(|r| (r.payment_method.as_str(), r.total_sales))
        .collect();
    pie(&panels[3], "Sales Distribution by Payment Method", &payments)?;

    Ok(())
}

// Headroom above the tallest bar; an all-zero panel still gets a unit axis.
fn axis_top(bars: &[(&str, f64)]) -> f64 {
    let max = bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    if max > 0.0 { max * 1.1 } else { 1.0 }
}

fn segment_label(bars: &[(&str, f64)], value: &SegmentValue<u32>) -> String {
    match value {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => bars
            .get(*i as usize)
            .map(|(label, _)| label.to_string())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    }
}

fn vertical_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    axis: &str,
    bars: &[(&str, f64)],
    color: RGBColor,
) -> DrawResult<(), DB> {
    let n = bars.len().max(1) as u32;
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .build_cartesian_2d((0u32..n).into_segmented(), 0f64..axis_top(bars))?;

    let x_label = |v: &SegmentValue<u32>| segment_label(bars, v);
    let y_label = |v: &f64| thousands(*v);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n as usize)
        .x_label_formatter(&x_label)
        .y_label_formatter(&y_label)
        .y_desc(axis)
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(color.filled())
            .margin(10)
            .data(bars.iter().enumerate().map(|(i, (_, v))| (i as u32, *v))),
    )?;
    Ok(())
}

fn horizontal_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    axis: &str,
    bars: &[(&str, f64)],
    color: RGBColor,
) -> DrawResult<(), DB> {
    let n = bars.len().max(1) as u32;
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(140)
        .build_cartesian_2d(0f64..axis_top(bars), (0u32..n).into_segmented())?;

    let x_label = |v: &f64| thousands(*v);
    let y_label = |v: &SegmentValue<u32>| segment_label(bars, v);
    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(n as usize)
        .x_label_formatter(&x_label)
        .y_label_formatter(&y_label)
        .x_desc(axis)
        .draw()?;

    chart.draw_series(
        Histogram::horizontal(&chart)
            .style(color.filled())
            .margin(10)
            .data(bars.iter().enumerate().map(|(i, (_, v))| (i as u32, *v))),
    )?;
    Ok(())
}

fn pie<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, title: &str, slices: &[(&str, f64)]) -> DrawResult<(), DB> {
    let area = area.titled(title, ("sans-serif", 22))?;

    let sizes: Vec<f64> = slices.iter().map(|(_, v)| v.max(0.0)).collect();
    if sizes.iter().sum::<f64>() <= 0.0 {
        return Ok(());
    }
    let labels: Vec<&str> = slices.iter().map(|(label, _)| *label).collect();
    let colors: Vec<RGBColor> = (0..sizes.len()).map(|i| PIE_COLORS[i % PIE_COLORS.len()]).collect();

    // The pie element draws in backend pixels, not area-relative ones.
    let (x0, y0) = area.get_base_pixel();
    let (w, h) = area.dim_in_pixel();
    let center = (x0 + w as i32 / 2, y0 + h as i32 / 2);
    let radius = f64::from(w.min(h)) * 0.35;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
    pie.percentages(("sans-serif", radius * 0.09).into_font().color(&WHITE));
    area.draw(&pie)?;
    Ok(())
}
