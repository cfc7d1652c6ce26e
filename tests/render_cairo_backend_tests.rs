#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use bar_chart_kit::ChartError;
use bar_chart_kit::api::{BarChartConfig, BarChartEngine};
use bar_chart_kit::core::{Bar, DataElement, DataSet, Limit, Viewport};
use bar_chart_kit::render::{CairoRenderer, Color};

fn data_set() -> DataSet {
    let green = Color::rgb(0.0, 1.0, 0.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);
    DataSet::new(vec![
        DataElement::new("Jan", vec![Bar::new(20_000.0, green), Bar::new(15_000.0, blue)]),
        DataElement::new("Feb", vec![Bar::new(0.0, green)]),
    ])
    .with_limit(Limit::new(12_000.0, Color::rgb(0.5, 0.5, 0.5)).with_label("YOUR LIMIT"))
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 172).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_bars_limit_and_labels() {
    let renderer = CairoRenderer::new(375, 172).expect("renderer");
    let config = BarChartConfig::new(Viewport::new(375, 172));
    let mut engine = BarChartEngine::new(renderer, config).expect("engine init");
    engine.set_data_set(data_set());

    engine.render().expect("render");
    let renderer = engine.into_renderer();
    let stats = renderer.last_stats();

    assert_eq!(stats.rects_drawn, 3);
    assert_eq!(stats.lines_drawn, 1);
    assert_eq!(stats.texts_drawn, 3);

    let mut png = Vec::new();
    renderer.write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(375, 172).expect("renderer");
    let config = BarChartConfig::new(Viewport::new(375, 172));
    let mut engine = BarChartEngine::new(renderer, config).expect("engine init");
    engine.set_data_set(data_set());

    let surface = ImageSurface::create(Format::ARgb32, 375, 172).expect("surface");
    let context = Context::new(&surface).expect("context");
    assert!(
        engine
            .render_on_cairo_context(&context)
            .expect("render on context")
    );

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_stats().rects_drawn, 3);
}
