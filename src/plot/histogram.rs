use super::*;

pub(crate) fn histogram_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    table: &Table,
    details: &HistogramDetails,
    settings: &FigureSettings,
) -> Result<()> {
    let core = details.core();
    let fill = color::parse(details.color())?;
    let edge = color::parse(details.edgecolor())?;

    let values = panel_values(table, core.column())?;
    let (x_range, histogram) = match Sample::try_new(&values) {
        Some(sample) => {
            let x_range = padded_range(core.column(), sample.min(), sample.max())?;
            (x_range, Some(sample.histogram(details.bins())))
        }
        None => (0.0..1.0, None),
    };
    let max_count = histogram.as_ref().map_or(0, Histogram::max_count) as f64;
    let y_range = 0.0..(max_count * 1.05).max(1.0);

    let mut chart = ChartBuilder::on(area)
        .caption(
            core.title(),
            (settings.get_font(), settings.get_caption_size()),
        )
        .margin((5).percent())
        .set_label_area_size(LabelAreaPosition::Left, (12).percent_width().min(60))
        .set_label_area_size(LabelAreaPosition::Bottom, (10).percent_height().min(50))
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(core.xlabel())
        .y_desc(core.ylabel())
        .axis_desc_style((settings.get_font(), settings.get_label_size()))
        .x_label_formatter(&|x| pretty_print_float(*x, true))
        .y_label_formatter(&|y| pretty_print_float(*y, false))
        .draw()?;

    if let Some(histogram) = histogram {
        let bars = || {
            histogram
                .bins()
                .iter()
                .map(|bin| [(bin.start, 0.0), (bin.end, bin.count as f64)])
        };

        chart.draw_series(bars().map(|corners| Rectangle::new(corners, fill.filled())))?;
        chart.draw_series(bars().map(|corners| Rectangle::new(corners, edge.stroke_width(1))))?;
    }

    Ok(())
}
