#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use desktop::commands;
use desktop::state::{AppState, SharedAppState};
use std::sync::{Arc, Mutex};
use tauri::State;

#[tauri::command]
fn load_dataset(state: State<'_, SharedAppState>, path: String) -> commands::LoadResult {
    let mut state = state.lock().expect("app state poisoned");
    commands::load_dataset(&mut state, &path)
}

#[tauri::command]
fn export_listado_excel(state: State<'_, SharedAppState>, path: String) -> commands::ExportResult {
    let mut state = state.lock().expect("app state poisoned");
    commands::export_listado_excel(&mut state, &path)
}

#[tauri::command]
fn export_distribution(
    state: State<'_, SharedAppState>,
    path: String,
    recipients: i64,
) -> commands::ExportResult {
    let mut state = state.lock().expect("app state poisoned");
    commands::export_distribution(&mut state, &path, recipients)
}

#[tauri::command]
fn export_distribution_continuation(
    state: State<'_, SharedAppState>,
    path: String,
    start_date: String,
    lists: i64,
) -> commands::ExportResult {
    let mut state = state.lock().expect("app state poisoned");
    commands::export_distribution_continuation(&mut state, &path, &start_date, lists)
}

fn main() {
    tracing_subscriber::fmt().init();

    let state: SharedAppState = Arc::new(Mutex::new(AppState::new()));
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_shell::init())
        .manage(state)
        .invoke_handler(tauri::generate_handler![
            load_dataset,
            export_listado_excel,
            export_distribution,
            export_distribution_continuation
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
