//! Web glue: the CRUD API for parameter snapshots and the frame endpoints
//! that stream display lists to the browser frontend.

use crate::driver::{start_visualization, AnimationDriver};
use crate::elements::name_for_protons;
use crate::scene::{AtomParameters, AtomScene, DebugScene};
use crate::store::{AtomStore, STORE};
use crate::viewer::{DrawCall, RecordingViewer};
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::{RwLockReadGuard, RwLockWriteGuard};

#[derive(Deserialize)]
struct AtomQuery {
    id: Option<u64>,
}

#[derive(Deserialize)]
struct FrameQuery {
    protons: Option<u32>,
    neutrons: Option<u32>,
    electrons: Option<u32>,
    t: Option<f64>,
}

#[derive(Deserialize)]
struct DebugFrameQuery {
    t: Option<f64>,
}

#[derive(Serialize)]
struct FrameResponse {
    element: String,
    time: f64,
    time_step: f64,
    draw_calls: Vec<DrawCall>,
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/atom", get(get_atom).post(create_atom).put(update_atom))
        .route("/api/frame", get(frame))
        .route("/api/debug-frame", get(debug_frame))
}

fn read_store() -> RwLockReadGuard<'static, AtomStore> {
    STORE.read().unwrap_or_else(|e| e.into_inner())
}

fn write_store() -> RwLockWriteGuard<'static, AtomStore> {
    STORE.write().unwrap_or_else(|e| e.into_inner())
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "atom not found" }))).into_response()
}

async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

async fn get_atom(Query(q): Query<AtomQuery>) -> Response {
    let store = read_store();
    let record = match q.id {
        Some(id) => store.get(id),
        None => store.latest(),
    };
    match record {
        Some(record) => Json(record).into_response(),
        None => not_found(),
    }
}

async fn create_atom(Json(params): Json<AtomParameters>) -> Response {
    let id = write_store().insert(params);
    log::info!(
        "created atom {id}: {}p {}n {}e",
        params.protons,
        params.neutrons,
        params.electrons
    );
    Json(json!({ "id": id })).into_response()
}

async fn update_atom(Query(q): Query<AtomQuery>, Json(params): Json<AtomParameters>) -> Response {
    let Some(id) = q.id else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "id is required" })),
        )
            .into_response();
    };
    match write_store().update(id, params) {
        Some(record) => Json(record).into_response(),
        None => not_found(),
    }
}

/// One atom-view frame at absolute time `t` as a display list. The browser
/// owns the clock and advances `t` by `time_step` between requests.
async fn frame(Query(q): Query<FrameQuery>) -> Response {
    let params = AtomParameters {
        protons: q.protons.unwrap_or(6).min(118),
        neutrons: q.neutrons.unwrap_or(6).min(200),
        electrons: q.electrons.unwrap_or(6).min(200),
    };
    let t = q.t.unwrap_or(0.0);

    let mut driver = match start_visualization(params, RecordingViewer::new()) {
        Ok(driver) => driver,
        Err(e) => return viz_failure(e),
    };
    driver.seek(t);
    if let Err(e) = driver.tick() {
        return viz_failure(e);
    }

    let mut viewer = driver.into_viewer();
    Json(FrameResponse {
        element: name_for_protons(params.protons).to_string(),
        time: t,
        time_step: AtomScene::TIME_STEP,
        draw_calls: viewer.take_calls(),
    })
    .into_response()
}

/// One mesh-debug frame; same contract as `frame` with its own time step.
async fn debug_frame(Query(q): Query<DebugFrameQuery>) -> Response {
    let t = q.t.unwrap_or(0.0);
    let mut driver = match AnimationDriver::new(RecordingViewer::new(), DebugScene::new()) {
        Ok(driver) => driver,
        Err(e) => return viz_failure(e),
    };
    driver.start();
    driver.seek(t);
    if let Err(e) = driver.tick() {
        return viz_failure(e);
    }

    let mut viewer = driver.into_viewer();
    Json(FrameResponse {
        element: "Debug".to_string(),
        time: t,
        time_step: DebugScene::TIME_STEP,
        draw_calls: viewer.take_calls(),
    })
    .into_response()
}

fn viz_failure(e: crate::error::VizError) -> Response {
    log::error!("visualization failed: {e}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": e.to_string() })),
    )
        .into_response()
}

const INDEX_HTML: &str = r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Atomlab</title>
    <style>
      html, body { margin: 0; padding: 0; height: 100%; background: #0b0c10; color: #e6e6e6; font-family: "Segoe UI", sans-serif; }
      canvas { display: block; }
      #panel { position: absolute; top: 12px; left: 12px; width: 260px; background: rgba(10,12,16,0.9); padding: 12px; border: 1px solid #2a2f36; border-radius: 10px; }
      .brand { font-size: 16px; font-weight: 600; }
      .row { display: flex; align-items: center; gap: 6px; margin-top: 8px; }
      .row label { font-size: 12px; color: #a7b0ba; min-width: 70px; }
      input, select, button { background: #0f141b; color: #e6e6e6; border: 1px solid #2a2f36; border-radius: 6px; padding: 4px 6px; font-size: 12px; }
      input[type="number"] { width: 64px; }
      button { cursor: pointer; }
      button:hover { border-color: #3c6a9e; }
      #element { margin-top: 8px; font-size: 13px; color: #9fd3ff; }
      #error { display: none; margin-top: 8px; padding: 6px; background: #4a1418; border: 1px solid #8a2a30; border-radius: 6px; font-size: 12px; }
    </style>
  </head>
  <body>
    <canvas id="view"></canvas>
    <div id="panel">
      <div class="brand">Atomlab</div>
      <div class="row"><label>Element</label>
        <select id="preset"></select>
      </div>
      <div class="row"><label>Protons</label><input id="protons" type="number" min="0" value="6" /></div>
      <div class="row"><label>Neutrons</label><input id="neutrons" type="number" min="0" value="6" /></div>
      <div class="row"><label>Electrons</label><input id="electrons" type="number" min="0" value="6" /></div>
      <div class="row">
        <button id="save">Save</button>
        <button id="load">Load latest</button>
      </div>
      <div id="element"></div>
      <div id="error"></div>
    </div>
    <script>
      const canvas = document.getElementById('view');
      const ctx = canvas.getContext('2d');
      const names = ['Hydrogen','Helium','Lithium','Beryllium','Boron','Carbon','Nitrogen','Oxygen','Fluorine','Neon','Sodium','Magnesium','Aluminum','Silicon','Phosphorus','Sulfur','Chlorine','Argon','Potassium','Calcium'];
      const preset = document.getElementById('preset');
      names.forEach((n, i) => {
        const opt = document.createElement('option');
        opt.value = i + 1; opt.textContent = n;
        preset.appendChild(opt);
      });
      preset.value = 6;
      preset.onchange = () => {
        const z = Number(preset.value);
        field('protons').value = z;
        field('electrons').value = z;
        field('neutrons').value = z;
        recordId = null;
      };
      function field(id) { return document.getElementById(id); }
      function resize() { canvas.width = innerWidth; canvas.height = innerHeight; }
      addEventListener('resize', resize); resize();

      let recordId = null;
      let t = 0;
      let step = 0.1;

      function showError(msg) {
        const el = document.getElementById('error');
        el.style.display = msg ? 'block' : 'none';
        el.textContent = msg || '';
      }

      async function loadLatest() {
        const res = await fetch('/api/atom');
        if (!res.ok) { showError('no saved atom'); return; }
        const atom = await res.json();
        recordId = atom.id;
        field('protons').value = atom.protons;
        field('neutrons').value = atom.neutrons;
        field('electrons').value = atom.electrons;
        t = 0;
      }

      async function save() {
        const body = JSON.stringify({
          protons: Number(field('protons').value),
          neutrons: Number(field('neutrons').value),
          electrons: Number(field('electrons').value),
        });
        const headers = { 'Content-Type': 'application/json' };
        if (recordId === null) {
          const res = await fetch('/api/atom', { method: 'POST', headers, body });
          recordId = (await res.json()).id;
        } else {
          await fetch('/api/atom?id=' + recordId, { method: 'PUT', headers, body });
        }
      }

      document.getElementById('save').onclick = save;
      document.getElementById('load').onclick = loadLatest;

      const rotY = 0.6, rotX = 0.35, scale = 260;
      function project(p) {
        let x = p.x * Math.cos(rotY) + p.z * Math.sin(rotY);
        let z = -p.x * Math.sin(rotY) + p.z * Math.cos(rotY);
        let y = p.y * Math.cos(rotX) - z * Math.sin(rotX);
        return [canvas.width / 2 + x * scale, canvas.height / 2 - y * scale];
      }
      function css(c, a) {
        return 'rgba(' + (c.r * 255 | 0) + ',' + (c.g * 255 | 0) + ',' + (c.b * 255 | 0) + ',' + a + ')';
      }

      function draw(calls) {
        ctx.clearRect(0, 0, canvas.width, canvas.height);
        for (const call of calls) {
          if (call.kind === 'mesh') {
            ctx.fillStyle = css(call.color, Math.min(call.opacity, 0.35));
            for (let i = 0; i < call.vertices.length; i += 21) {
              const [px, py] = project({ x: call.vertices[i], y: call.vertices[i + 1], z: call.vertices[i + 2] });
              ctx.fillRect(px, py, 2, 2);
            }
          } else if (call.kind === 'cylinder') {
            ctx.strokeStyle = css(call.color, 0.8);
            ctx.beginPath();
            ctx.moveTo(...project(call.start));
            ctx.lineTo(...project(call.end));
            ctx.stroke();
          } else {
            const [px, py] = project(call.center);
            ctx.fillStyle = css(call.color, call.opacity);
            ctx.beginPath();
            ctx.arc(px, py, Math.max(call.radius * scale, 2), 0, Math.PI * 2);
            ctx.fill();
          }
        }
      }

      async function animate() {
        const q = new URLSearchParams({
          protons: field('protons').value,
          neutrons: field('neutrons').value,
          electrons: field('electrons').value,
          t: t.toFixed(3),
        });
        try {
          const res = await fetch('/api/frame?' + q);
          if (!res.ok) { showError('frame request failed'); return; }
          const data = await res.json();
          showError(null);
          document.getElementById('element').textContent = data.element + ' atom';
          draw(data.draw_calls);
          step = data.time_step;
          t += step;
        } catch (err) {
          showError(String(err));
          return;
        }
        requestAnimationFrame(animate);
      }

      loadLatest().finally(() => requestAnimationFrame(animate));
    </script>
  </body>
</html>
"##;
