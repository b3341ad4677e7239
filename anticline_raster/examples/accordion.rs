// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folds a test card at several fold factors and writes the frames as
//! PNG files, tracing every phase through a
//! [`PrettyPrintSink`](anticline_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](anticline_debug::recorder::RecorderSink), then
//! exports the recording as JSON.

use std::fs::File;
use std::io::BufWriter;

use image::{Rgba, RgbaImage};

use anticline_core::backend::ContentStrategy;
use anticline_core::fold::{Extent, FoldConfig, FoldEngine, NoopListener, Orientation};
use anticline_core::trace::{CompositeEvent, ConfigureEvent, SolveEvent, TraceSink, Tracer};
use anticline_debug::pretty::PrettyPrintSink;
use anticline_debug::recorder::RecorderSink;
use anticline_harness::sweep;
use anticline_raster::RasterSurface;
use anticline_render::composite::composite;
use anticline_render::plan::FoldPlan;

const WIDTH: u32 = 400;
const HEIGHT: u32 = 240;
const FACTORS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 0.9];

/// A checkered test card with a red border.
fn test_card() -> RgbaImage {
    RgbaImage::from_fn(WIDTH, HEIGHT, |x, y| {
        if x < 4 || y < 4 || x >= WIDTH - 4 || y >= HEIGHT - 4 {
            Rgba([200, 40, 40, 255])
        } else if (x / 20 + y / 20) % 2 == 0 {
            Rgba([245, 245, 245, 255])
        } else {
            Rgba([90, 120, 180, 255])
        }
    })
}

fn main() {
    let extent = Extent::new(WIDTH, HEIGHT);
    let snapshot = test_card();

    let config = FoldConfig {
        orientation: Orientation::Horizontal,
        anchor_factor: 0.5,
        fold_count: 4,
    };

    let mut engine = FoldEngine::new();
    engine.configure(config).expect("valid fold config");

    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut recorder = RecorderSink::new();

    let configure_event = ConfigureEvent {
        orientation: config.orientation,
        anchor_factor: config.anchor_factor,
        fold_count: config.fold_count,
    };
    pretty.on_configure(&configure_event);
    recorder.on_configure(&configure_event);

    // -- frames ------------------------------------------------------------
    let mut plan = FoldPlan::default();
    for (frame, factor) in FACTORS.into_iter().enumerate() {
        let frame_index = frame as u64;
        engine.set_fold_factor(factor);
        let _ = engine.solve(extent, &mut NoopListener);

        let geometry = engine.geometry();
        let solve_event = SolveEvent {
            frame_index,
            fold_factor: factor,
            extent,
            segment_count: engine.fold_count(),
            should_draw: geometry.should_draw,
        };
        pretty.on_solve(&solve_event);
        recorder.on_solve(&solve_event);

        plan.rebuild(engine.orientation(), geometry);
        let mut surface = RasterSurface::new(WIDTH, HEIGHT).with_snapshot(snapshot.clone());
        let drawn = composite(&plan, &mut surface);

        let composite_event = CompositeEvent {
            frame_index,
            strategy: ContentStrategy::Snapshot,
            segments_drawn: drawn,
        };
        pretty.on_composite(&composite_event);
        recorder.on_composite(&composite_event);

        // Exercise the Tracer wrapper once (dispatches when the `trace`
        // feature is enabled).
        if frame == 0 {
            let mut tracer = Tracer::new(&mut pretty);
            tracer.solve(&solve_event);
        }

        let path = format!("accordion_{frame:02}.png");
        surface
            .into_target()
            .save(&path)
            .expect("failed to write PNG frame");
        println!("wrote {path}");
    }

    // -- export recording --------------------------------------------------
    let path = "accordion_trace.json";
    let file = File::create(path).expect("failed to create trace file");
    let mut writer = BufWriter::new(file);
    anticline_debug::json::export(recorder.as_bytes(), &mut writer)
        .expect("failed to write JSON trace");
    println!("wrote {path}");

    // -- sweep summary ------------------------------------------------------
    let report = sweep(&mut engine, extent, 21);
    println!(
        "sweep: {} frames, {} drawn, {} blank, {} start edges, {} end edges",
        report.frames, report.drawn_frames, report.blank_frames, report.start_folds,
        report.end_folds,
    );
}
