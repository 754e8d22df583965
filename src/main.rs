//! Delivery Time Predictor - Main Entry Point
//!
//! Loads the trained scaler and model artifacts, then serves a terminal
//! form: shipment attributes in, estimated delivery time in days out.

use anyhow::Result;
use delivery_time_predictor::{
    config::AppConfig, form::ShipmentForm, metrics::SessionMetrics, models::PredictionPipeline,
};
use std::io::{self, Write};
use std::time::Instant;
use tracing::{error, info};

fn main() -> Result<()> {
    // Initialize logging
    let config = AppConfig::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                format!("delivery_time_predictor={}", config.logging.level).parse()?,
            ),
        )
        .init();

    info!("Starting Delivery Time Predictor");
    info!(
        scaler = %config.artifacts.scaler_path,
        model = %config.artifacts.model_path,
        "Configuration loaded"
    );

    // Load artifacts before accepting any input; a failure here is a
    // deployment error and halts the process.
    let pipeline = match PredictionPipeline::from_artifacts(&config.artifacts) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            error!(error = %e, "Failed to load artifacts");
            eprintln!("Error: {e}");
            eprintln!("Ensure both artifact files are present and readable, then restart.");
            std::process::exit(1);
        }
    };
    info!("Prediction pipeline ready");

    let metrics = SessionMetrics::new();
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();

    println!("Delivery Time Predictor");
    println!("Enter shipment details below to estimate the delivery time (Ctrl-D to quit).");

    loop {
        println!();
        let shipment = match ShipmentForm::read_shipment(&mut reader, &mut stdout)? {
            Some(shipment) => shipment,
            None => break,
        };

        let start = Instant::now();
        match pipeline.predict(&shipment) {
            Ok(prediction) => {
                let latency = start.elapsed();
                metrics.record_prediction(latency, prediction.days);
                info!(
                    prediction_id = %prediction.prediction_id,
                    days = prediction.days,
                    processing_time_us = latency.as_micros(),
                    "Prediction served"
                );
                println!(
                    "Estimated delivery time: {} days",
                    prediction.display_days()
                );
            }
            Err(e) => {
                // Terminal for this attempt only; the form stays open.
                metrics.record_failure();
                error!(error = %e, "Prediction failed");
                println!("Error during prediction: {e}");
            }
        }
        stdout.flush()?;
    }

    info!("Shutting down");
    metrics.print_summary();

    Ok(())
}
