//! Embedded dashboard page.
//!
//! The single HTML asset served at `/`, kept as a template string so it can
//! be bundled directly inside the binary without filesystem lookups. Overlay
//! geometry for all three shapes is inlined at render time, so switching the
//! dropdown never makes a network call; only the submit button talks to the
//! server.

use crate::command::Sensitivity;
use crate::geometry::{self, MAP_ZOOM, SIEBEL_CENTER, ShapeKind};

// =============================================================================
// TEMPLATE
// =============================================================================

const PAGE_TEMPLATE: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Bot Patrol</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"
    crossorigin="" referrerpolicy="no-referrer" />
  <style>
    body {
      background-color: #e9ecef;
      font-family: "Helvetica Neue", Helvetica, Arial, sans-serif;
      margin: 0;
      padding-bottom: 20px;
    }
    h1 {
      text-align: center;
      margin: 0;
      padding-top: 20px;
      font-size: 2.5em;
      color: #333;
    }
    .row {
      display: flex;
      justify-content: space-around;
      padding: 20px;
    }
    .selector-panel {
      width: 20%;
      padding: 20px;
      background-color: #f8f9fa;
      border-radius: 8px;
      box-shadow: 0 2px 4px rgba(0,0,0,.1);
      align-self: flex-start;
    }
    .selector-panel select {
      width: 100%;
      color: #333;
      font-size: 16px;
      padding: 8px;
    }
    .map-panel { width: 75%; padding: 20px; }
    #map { width: 100%; height: 500px; border-radius: 8px; }
    .submit-row {
      display: flex;
      justify-content: center;
      align-items: center;
      padding-top: 20px;
    }
    #sensitivity-input {
      margin-right: 10px;
      width: 100px;
      height: 40px;
      text-align: center;
      border-radius: 5px;
      border: 1px solid #bbb;
      font-size: 16px;
      outline: none;
    }
    #submit-shape {
      background-color: #28a745;
      color: white;
      padding: 10px 24px;
      border: none;
      cursor: pointer;
      border-radius: 5px;
      font-size: 16px;
      outline: none;
      transition: background-color 0.3s;
    }
    #submit-shape:hover { background-color: #218838; }
    #submit-shape:active { background-color: #1e7e34; }
    #status {
      text-align: center;
      padding-top: 10px;
      font-size: 18px;
      color: #333;
    }
    dialog#confirm-alert {
      border: 1px solid #bbb;
      border-radius: 8px;
      padding: 24px;
      font-size: 16px;
      color: #333;
    }
  </style>
</head>
<body>
  <h1>Bot Patrol</h1>
  <dialog id="confirm-alert">
    <p>Your area has been secured.</p>
    <form method="dialog" style="text-align: center;">
      <button>OK</button>
    </form>
  </dialog>
  <div class="row">
    <div class="selector-panel">
      <select id="shape-selector">
        <option value="line" selected>Line</option>
        <option value="triangle">Triangle</option>
        <option value="square">Square</option>
      </select>
    </div>
    <div class="map-panel">
      <div id="map"></div>
    </div>
  </div>
  <div class="submit-row">
    <input id="sensitivity-input" type="number"
      value="__SENSITIVITY_DEFAULT__" min="__SENSITIVITY_MIN__"
      max="__SENSITIVITY_MAX__" step="__SENSITIVITY_STEP__" />
    <button id="submit-shape">Submit</button>
  </div>
  <div id="status">Select a shape, set sensitivity, and click 'Submit Shape'</div>

  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"
    crossorigin="" referrerpolicy="no-referrer"></script>
  <script>
    const OVERLAYS = __OVERLAYS__;
    const MAP_CENTER = __CENTER__;
    const MAP_ZOOM = __ZOOM__;

    const map = L.map('map').setView(MAP_CENTER, MAP_ZOOM);
    L.tileLayer('https://tile.openstreetmap.org/{z}/{x}/{y}.png', {
      attribution: '&copy; OpenStreetMap contributors'
    }).addTo(map);

    let currentLayer = null;

    function showOverlay(kind) {
      if (currentLayer !== null) {
        map.removeLayer(currentLayer);
        currentLayer = null;
      }
      const overlay = OVERLAYS[kind];
      if (overlay === undefined) {
        return;
      }
      if (overlay.type === 'rectangle') {
        currentLayer = L.rectangle(overlay.bounds, { color: overlay.color });
      } else if (overlay.type === 'polygon') {
        currentLayer = L.polygon(overlay.positions, { color: overlay.color });
      } else if (overlay.type === 'polyline') {
        currentLayer = L.polyline(overlay.positions, { color: overlay.color });
      } else {
        return;
      }
      currentLayer.addTo(map);
    }

    const selector = document.getElementById('shape-selector');
    const sensitivity = document.getElementById('sensitivity-input');
    const status = document.getElementById('status');
    let clicks = 0;

    selector.addEventListener('change', () => showOverlay(selector.value));
    showOverlay(selector.value);

    document.getElementById('submit-shape').addEventListener('click', async () => {
      clicks += 1;
      const body = {
        shape: selector.value,
        sensitivity: Number(sensitivity.value),
        clicks: clicks
      };
      try {
        const response = await fetch('/api/patrol', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(body)
        });
        const reply = await response.json();
        status.textContent = reply.status;
      } catch (err) {
        status.textContent = 'Could not reach the patrol server.';
      }
    });

    window.addEventListener('load', () => {
      document.getElementById('confirm-alert').showModal();
    });
  </script>
</body>
</html>
"##;

// =============================================================================
// RENDERING
// =============================================================================

/// Overlay geometry for every shape, as the JSON object inlined into the page.
fn overlays_json() -> String {
    let mut map = serde_json::Map::new();
    for kind in ShapeKind::ALL {
        let Ok(value) = serde_json::to_value(geometry::overlay_for(kind)) else {
            continue;
        };
        map.insert(kind.as_str().to_string(), value);
    }
    serde_json::Value::Object(map).to_string()
}

/// Render the dashboard page with geometry and input limits filled in.
#[must_use]
pub fn render_dashboard() -> String {
    PAGE_TEMPLATE
        .replace("__OVERLAYS__", &overlays_json())
        .replace("__CENTER__", &format!("[{}, {}]", SIEBEL_CENTER.lat, SIEBEL_CENTER.lng))
        .replace("__ZOOM__", &MAP_ZOOM.to_string())
        .replace("__SENSITIVITY_DEFAULT__", &Sensitivity::DEFAULT.to_string())
        .replace("__SENSITIVITY_MIN__", &Sensitivity::MIN.to_string())
        .replace("__SENSITIVITY_MAX__", &Sensitivity::MAX.to_string())
        .replace("__SENSITIVITY_STEP__", &Sensitivity::STEP.to_string())
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
