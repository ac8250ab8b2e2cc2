//! Scannable manhole tag: `<scheme>://manhole/<id>` encoded as a QR code
//! with high error correction.

use crate::errors::{AppError, AppResult};
use qrcode::render::{svg, unicode};
use qrcode::{EcLevel, QrCode};

pub fn payload(scheme: &str, manhole_id: &str) -> String {
    format!("{scheme}://manhole/{manhole_id}")
}

fn encode(payload: &str) -> AppResult<QrCode> {
    QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::H)
        .map_err(|e| AppError::Qr(e.to_string()))
}

/// Half-block rendering for terminals.
pub fn render_terminal(payload: &str) -> AppResult<String> {
    let code = encode(payload)?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .quiet_zone(true)
        .build())
}

pub fn render_svg(payload: &str, size: u32) -> AppResult<String> {
    let code = encode(payload)?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(size, size)
        .quiet_zone(true)
        .build())
}
