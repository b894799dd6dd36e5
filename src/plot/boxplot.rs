use super::*;
use crate::stats::univariate::outliers::tukey::Fences;

const BOX_LEFT: f64 = 0.3;
const BOX_RIGHT: f64 = 0.7;
const CAP_LEFT: f64 = 0.4;
const CAP_RIGHT: f64 = 0.6;
const CENTER: f64 = 0.5;

/// The five values a box plot draws, plus the points beyond the whiskers
#[derive(Debug, PartialEq)]
pub(crate) struct BoxStats {
    q1: f64,
    median: f64,
    q3: f64,
    whisker_low: f64,
    whisker_high: f64,
    fliers: Vec<f64>,
}

impl BoxStats {
    /// Whiskers reach the furthest data points inside the 1.5 IQR fences; anything outside is
    /// a flier.
    pub(crate) fn new(sample: &Sample<f64>) -> BoxStats {
        let percentiles = sample.percentiles();
        let (q1, median, q3) = percentiles.quartiles();
        let fences = Fences::from_quartiles(q1, q3);

        let (inside, fliers): (Vec<f64>, Vec<f64>) = percentiles
            .sorted()
            .iter()
            .partition(|&&x| !fences.label(x).is_outlier());

        BoxStats {
            q1,
            median,
            q3,
            whisker_low: inside.first().cloned().unwrap_or(q1),
            whisker_high: inside.last().cloned().unwrap_or(q3),
            fliers,
        }
    }
}

pub(crate) fn boxplot_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    table: &Table,
    details: &BoxplotDetails,
    settings: &FigureSettings,
) -> Result<()> {
    let core = details.core();
    let fill = color::parse(details.color())?;

    let values = panel_values(table, core.column())?;
    let sample = Sample::try_new(&values);
    let y_range = match sample {
        Some(sample) => padded_range(core.column(), sample.min(), sample.max())?,
        None => 0.0..1.0,
    };

    let mut chart = ChartBuilder::on(area)
        .caption(
            core.title(),
            (settings.get_font(), settings.get_caption_size()),
        )
        .margin((5).percent())
        .set_label_area_size(LabelAreaPosition::Left, (12).percent_width().min(60))
        .set_label_area_size(LabelAreaPosition::Bottom, (10).percent_height().min(50))
        .build_cartesian_2d(0.0..1.0, y_range)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(core.xlabel())
        .y_desc(core.ylabel())
        .axis_desc_style((settings.get_font(), settings.get_label_size()))
        .x_label_formatter(&|_: &f64| String::new())
        .y_label_formatter(&|y| pretty_print_float(*y, false))
        .draw()?;

    let stats = match sample {
        Some(sample) => BoxStats::new(sample),
        None => return Ok(()),
    };

    let line = || LINE_GRAY.stroke_width(1);

    chart.draw_series(std::iter::once(Rectangle::new(
        [(BOX_LEFT, stats.q1), (BOX_RIGHT, stats.q3)],
        fill.filled(),
    )))?;
    chart.draw_series(std::iter::once(Rectangle::new(
        [(BOX_LEFT, stats.q1), (BOX_RIGHT, stats.q3)],
        line(),
    )))?;

    chart.draw_series(
        vec![
            vec![(BOX_LEFT, stats.median), (BOX_RIGHT, stats.median)],
            vec![(CENTER, stats.q1), (CENTER, stats.whisker_low)],
            vec![(CENTER, stats.q3), (CENTER, stats.whisker_high)],
            vec![(CAP_LEFT, stats.whisker_low), (CAP_RIGHT, stats.whisker_low)],
            vec![(CAP_LEFT, stats.whisker_high), (CAP_RIGHT, stats.whisker_high)],
        ]
        .into_iter()
        .map(|points| PathElement::new(points, line())),
    )?;

    chart.draw_series(
        stats
            .fliers
            .iter()
            .map(|&y| Circle::new((CENTER, y), POINT_SIZE, line())),
    )?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn whiskers_stop_at_fences() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        let stats = BoxStats::new(Sample::new(&v));

        assert_eq!(stats.q1, 3.25);
        assert_eq!(stats.median, 5.5);
        assert_eq!(stats.q3, 7.75);
        assert_eq!(stats.whisker_low, 1.0);
        assert_eq!(stats.whisker_high, 9.0);
        assert_eq!(stats.fliers, vec![100.0]);
    }

    #[test]
    fn single_value() {
        let stats = BoxStats::new(Sample::new(&[2.0]));

        assert_eq!(stats.whisker_low, 2.0);
        assert_eq!(stats.whisker_high, 2.0);
        assert!(stats.fliers.is_empty());
    }
}
