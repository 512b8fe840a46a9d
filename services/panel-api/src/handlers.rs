//! HTTP request handlers.
//!
//! JSON endpoints feed the dashboard's filter widgets and records table;
//! `/maps/:year` renders the annotated locator map for one municipality.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use georef::AffineTransform;
use landcover_common::{CoverClass, FilterSelection, LandCoverRecord, PanelError, PanelResult};
use marker::{encode_png, overlay_marker, resize_to_width, MarkerStyle};

use crate::state::AppState;

/// Display width maps are resized to when the request gives none.
const DEFAULT_MAP_WIDTH: u32 = 800;

/// Upper bound on the requested display width.
const MAX_MAP_WIDTH: u32 = 4096;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct MunicipalitiesResponse {
    pub count: usize,
    pub municipalities: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StatesResponse {
    pub count: usize,
    pub states: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct YearsResponse {
    pub count: usize,
    pub years: Vec<u16>,
}

#[derive(Debug, Serialize)]
pub struct ClassesResponse {
    pub count: usize,
    pub classes: Vec<ClassEntry>,
}

/// One cover class present in the dataset, with its legend color.
#[derive(Debug, Serialize)]
pub struct ClassEntry {
    pub code: u8,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub count: usize,
    pub records: Vec<RecordView>,
}

/// One statistics row as served to clients.
#[derive(Debug, Serialize)]
pub struct RecordView {
    pub municipality: String,
    pub state: String,
    pub year: u16,
    pub decade: u16,
    pub class_code: u8,
    pub class_name: String,
    pub area_ha: f64,
}

impl From<&LandCoverRecord> for RecordView {
    fn from(record: &LandCoverRecord) -> Self {
        Self {
            municipality: record.municipality.clone(),
            state: record.state.clone(),
            year: record.year,
            decade: record.decade(),
            class_code: record.class_code,
            class_name: record.class_name.clone(),
            area_ha: record.area_ha,
        }
    }
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Filter parameters accepted by `/api/records` and `/api/export`.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub municipality: Option<String>,
    pub year_start: Option<u16>,
    pub year_end: Option<u16>,
    /// Comma-separated class names. Present but empty selects nothing,
    /// like a cleared class multiselect.
    pub classes: Option<String>,
}

impl FilterParams {
    /// Translate the raw query parameters into a filter selection.
    ///
    /// A single year bound leaves the other side open.
    fn into_selection(self) -> PanelResult<FilterSelection> {
        let mut selection = FilterSelection::all();

        if let Some(municipality) = self.municipality {
            selection = selection.with_municipality(municipality);
        }

        if self.year_start.is_some() || self.year_end.is_some() {
            let start = self.year_start.unwrap_or(0);
            let end = self.year_end.unwrap_or(u16::MAX);
            if start > end {
                return Err(PanelError::InvalidParameter {
                    param: "year_start".to_string(),
                    message: format!("year_start {} is after year_end {}", start, end),
                });
            }
            selection = selection.with_years(start, end);
        }

        if let Some(classes) = self.classes {
            let names = classes
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string);
            selection = selection.with_classes(names);
        }

        Ok(selection)
    }
}

/// Query parameters accepted by `/maps/:year`.
#[derive(Debug, Deserialize)]
pub struct LocatorMapParams {
    pub municipality: Option<String>,
    pub width: Option<u32>,
}

// ============================================================================
// Exception Helpers
// ============================================================================

/// Map an error to its HTTP status.
fn status_for(err: &PanelError) -> StatusCode {
    StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Generate a plain-text warning response for a failed map request.
///
/// One unreadable sheet or degenerate world file turns into a warning on
/// that map alone; the service keeps running.
fn panel_exception(err: &PanelError) -> Response {
    Response::builder()
        .status(status_for(err))
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(err.to_string().into())
        .unwrap()
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// List the municipalities present in the statistics table.
#[instrument(skip(state))]
pub async fn municipalities_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<MunicipalitiesResponse> {
    let municipalities = dataset::municipalities(&state.records);
    Json(MunicipalitiesResponse {
        count: municipalities.len(),
        municipalities,
    })
}

/// List the federative units present in the statistics table.
#[instrument(skip(state))]
pub async fn states_handler(Extension(state): Extension<Arc<AppState>>) -> Json<StatesResponse> {
    let states = dataset::states(&state.records);
    Json(StatesResponse {
        count: states.len(),
        states,
    })
}

/// List the observation years present in the statistics table.
#[instrument(skip(state))]
pub async fn years_handler(Extension(state): Extension<Arc<AppState>>) -> Json<YearsResponse> {
    let years = dataset::years(&state.records);
    Json(YearsResponse {
        count: years.len(),
        years,
    })
}

/// List the cover classes present in the statistics table, with their
/// legend codes and colors.
#[instrument(skip(state))]
pub async fn classes_handler(Extension(state): Extension<Arc<AppState>>) -> Json<ClassesResponse> {
    let classes: Vec<ClassEntry> = dataset::class_names(&state.records)
        .into_iter()
        .filter_map(|name| {
            CoverClass::all()
                .iter()
                .find(|class| class.name == name)
                .map(|class| ClassEntry {
                    code: class.code,
                    name,
                    color: class.color.to_string(),
                })
        })
        .collect();
    Json(ClassesResponse {
        count: classes.len(),
        classes,
    })
}

/// Serve the statistics rows matching the requested filter.
#[instrument(skip(state))]
pub async fn records_handler(
    Query(params): Query<FilterParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<RecordsResponse>, StatusCode> {
    let selection = params.into_selection().map_err(|e| {
        warn!(error = %e, "Rejecting records request");
        status_for(&e)
    })?;

    let rows = dataset::filter_records(&state.records, &selection);
    info!(
        total = state.records.len(),
        matched = rows.len(),
        "Filtered statistics records"
    );

    let records: Vec<RecordView> = rows.into_iter().map(RecordView::from).collect();
    Ok(Json(RecordsResponse {
        count: records.len(),
        records,
    }))
}

/// Serve the filtered rows as a CSV download, in the same Brazilian
/// convention the statistics table uses.
#[instrument(skip(state))]
pub async fn export_handler(
    Query(params): Query<FilterParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let selection = params.into_selection().map_err(|e| {
        warn!(error = %e, "Rejecting export request");
        status_for(&e)
    })?;

    let rows = dataset::filter_records(&state.records, &selection);
    let csv = dataset::export_csv(&rows).map_err(|e| {
        error!(error = %e, "CSV export failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    info!(rows = rows.len(), bytes = csv.len(), "Exported filtered records");

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"dados_filtrados.csv\"",
        )
        .body(csv.into())
        .unwrap())
}

/// Serve the locator map for one year with the requested municipality
/// pinned.
#[instrument(skip(state))]
pub async fn locator_map_handler(
    Path(year): Path<u16>,
    Query(params): Query<LocatorMapParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    match render_locator_map(&state, year, &params) {
        Ok(png) => {
            info!(year, bytes = png.len(), "Rendered locator map");
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "image/png")
                .body(png.into())
                .unwrap()
        }
        Err(e) => {
            if status_for(&e).is_server_error() {
                error!(year, error = %e, "Locator map rendering failed");
            } else {
                warn!(year, error = %e, "Locator map request rejected");
            }
            panel_exception(&e)
        }
    }
}

/// Render one annotated locator map.
///
/// The sheet raster, its world file and the coordinate table are read on
/// every request; nothing map-related is cached between requests.
fn render_locator_map(
    state: &AppState,
    year: u16,
    params: &LocatorMapParams,
) -> PanelResult<Vec<u8>> {
    let municipality = params
        .municipality
        .as_deref()
        .ok_or_else(|| PanelError::MissingParameter("municipality".to_string()))?;

    let width = params.width.unwrap_or(DEFAULT_MAP_WIDTH);
    if width == 0 || width > MAX_MAP_WIDTH {
        return Err(PanelError::InvalidParameter {
            param: "width".to_string(),
            message: format!("width must be between 1 and {}", MAX_MAP_WIDTH),
        });
    }

    let sheet = state
        .registry
        .get(year)
        .ok_or(PanelError::MapYearNotFound(year))?;

    let base = image::open(&sheet.image_path)
        .map_err(|e| {
            PanelError::DataReadError(format!("{}: {}", sheet.image_path.display(), e))
        })?
        .to_rgba8();
    let transform = AffineTransform::from_world_file(&sheet.world_file_path)
        .map_err(|e| PanelError::WorldFileError(e.to_string()))?;
    let coordinates = dataset::load_coordinates(state.coordinates_path())
        .map_err(|e| PanelError::CoordinateTableError(e.to_string()))?;

    let annotated = overlay_marker(
        municipality,
        &base,
        &coordinates,
        &transform,
        &MarkerStyle::default(),
    )
    .map_err(|e| PanelError::ProjectionError(e.to_string()))?;

    let scaled = resize_to_width(&annotated, width);
    encode_png(&scaled).map_err(PanelError::RenderError)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::MapRegistry;
    use image::RgbaImage;
    use std::fs;
    use std::path::Path as StdPath;

    fn record(municipality: &str, year: u16, class_name: &str) -> LandCoverRecord {
        LandCoverRecord {
            municipality: municipality.to_string(),
            state: "TO".to_string(),
            year,
            class_code: 15,
            class_name: class_name.to_string(),
            area_ha: 10.0,
        }
    }

    // --- FilterParams ---

    #[test]
    fn test_empty_params_select_everything() {
        let selection = FilterParams::default().into_selection().unwrap();
        assert_eq!(selection, FilterSelection::all());
    }

    #[test]
    fn test_params_build_full_selection() {
        let params = FilterParams {
            municipality: Some("Palmas".to_string()),
            year_start: Some(1990),
            year_end: Some(2000),
            classes: Some("Pastagem, Soja".to_string()),
        };
        let selection = params.into_selection().unwrap();

        assert_eq!(
            selection,
            FilterSelection::all()
                .with_municipality("Palmas")
                .with_years(1990, 2000)
                .with_classes(["Pastagem", "Soja"])
        );
    }

    #[test]
    fn test_single_year_bound_leaves_other_side_open() {
        let params = FilterParams {
            year_start: Some(2000),
            ..FilterParams::default()
        };
        let selection = params.into_selection().unwrap();

        assert!(selection.matches(&record("Palmas", 2023, "Pastagem")));
        assert!(!selection.matches(&record("Palmas", 1999, "Pastagem")));
    }

    #[test]
    fn test_inverted_year_bounds_are_rejected() {
        let params = FilterParams {
            year_start: Some(2020),
            year_end: Some(1990),
            ..FilterParams::default()
        };
        let err = params.into_selection().unwrap_err();
        assert!(matches!(err, PanelError::InvalidParameter { .. }));
    }

    #[test]
    fn test_empty_class_list_selects_nothing() {
        let params = FilterParams {
            classes: Some(String::new()),
            ..FilterParams::default()
        };
        let selection = params.into_selection().unwrap();
        assert!(!selection.matches(&record("Palmas", 2023, "Pastagem")));
    }

    // --- Exception mapping ---

    #[test]
    fn test_exception_statuses() {
        let missing = PanelError::MissingParameter("municipality".to_string());
        assert_eq!(panel_exception(&missing).status(), StatusCode::BAD_REQUEST);

        let unknown = PanelError::MapYearNotFound(1999);
        assert_eq!(panel_exception(&unknown).status(), StatusCode::NOT_FOUND);

        let render = PanelError::RenderError("boom".to_string());
        assert_eq!(
            panel_exception(&render).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    // --- Response views ---

    #[test]
    fn test_record_view_carries_decade() {
        let view = RecordView::from(&record("Palmas", 2023, "Pastagem"));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["decade"], 2020);
        assert_eq!(json["class_code"], 15);
        assert_eq!(json["municipality"], "Palmas");
    }

    // --- Locator map rendering ---

    fn sheet_state(dir: &StdPath) -> AppState {
        fs::create_dir_all(dir.join("sheets")).unwrap();
        fs::create_dir_all(dir.join("coordenadas")).unwrap();

        let base = RgbaImage::from_pixel(40, 20, image::Rgba([230, 230, 230, 255]));
        base.save(dir.join("sheets/2023.png")).unwrap();

        fs::write(
            dir.join("sheets/2023.pgw"),
            "0.001\n0.0\n0.0\n-0.001\n-50.0\n10.0\n",
        )
        .unwrap();
        fs::write(
            dir.join("coordenadas/municipios_coord.csv"),
            "nome_municipio,longitude,latitude\nExemplo,-49.995,9.995\n",
        )
        .unwrap();

        let maps_config = dir.join("maps.yaml");
        fs::write(
            &maps_config,
            "maps:\n  - year: 2023\n    image: sheets/2023.png\n    world_file: sheets/2023.pgw\n",
        )
        .unwrap();

        AppState {
            records: Vec::new(),
            registry: MapRegistry::load_from_file(&maps_config, dir),
            data_dir: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_render_locator_map_produces_scaled_png() {
        let dir = tempfile::tempdir().unwrap();
        let state = sheet_state(dir.path());

        let params = LocatorMapParams {
            municipality: Some("exemplo".to_string()),
            width: Some(20),
        };
        let png = render_locator_map(&state, 2023, &params).unwrap();

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (20, 10));
    }

    #[test]
    fn test_render_requires_municipality() {
        let dir = tempfile::tempdir().unwrap();
        let state = sheet_state(dir.path());

        let params = LocatorMapParams {
            municipality: None,
            width: None,
        };
        let err = render_locator_map(&state, 2023, &params).unwrap_err();
        assert!(matches!(err, PanelError::MissingParameter(_)));
    }

    #[test]
    fn test_render_rejects_zero_width() {
        let dir = tempfile::tempdir().unwrap();
        let state = sheet_state(dir.path());

        let params = LocatorMapParams {
            municipality: Some("Exemplo".to_string()),
            width: Some(0),
        };
        let err = render_locator_map(&state, 2023, &params).unwrap_err();
        assert!(matches!(err, PanelError::InvalidParameter { .. }));
    }

    #[test]
    fn test_render_unknown_year_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let state = sheet_state(dir.path());

        let params = LocatorMapParams {
            municipality: Some("Exemplo".to_string()),
            width: None,
        };
        let err = render_locator_map(&state, 1985, &params).unwrap_err();
        assert!(matches!(err, PanelError::MapYearNotFound(1985)));
        assert_eq!(err.http_status_code(), 404);
    }

    #[test]
    fn test_render_unreadable_world_file_degrades_to_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let state = sheet_state(dir.path());
        fs::write(dir.path().join("sheets/2023.pgw"), "0.001\n0.0\n").unwrap();

        let params = LocatorMapParams {
            municipality: Some("Exemplo".to_string()),
            width: None,
        };
        let err = render_locator_map(&state, 2023, &params).unwrap_err();
        assert!(matches!(err, PanelError::WorldFileError(_)));
        assert_eq!(err.http_status_code(), 404);
    }
}
