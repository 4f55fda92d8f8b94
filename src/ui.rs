use crate::models::{CountryDetailResponse, HomeResponse};

pub fn render_index(home: &HomeResponse) -> String {
    INDEX_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{COUNTRIES}}", &home.number_of_countries.to_string())
        .replace("{{OLYMPIADS}}", &home.number_of_olympiads.to_string())
}

pub fn render_country(detail: &CountryDetailResponse) -> String {
    COUNTRY_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{PARTICIPATIONS}}", &detail.summary.participations.to_string())
        .replace("{{MEDALS}}", &detail.summary.total_medals.to_string())
        .replace("{{ATHLETES}}", &detail.summary.total_athletes.to_string())
}

const STYLE: &str = r#"
    :root {
      --bg: #f3f6fb;
      --ink: #1f2a44;
      --muted: #6b7588;
      --accent: #0a7bc2;
      --card: #ffffff;
      --shadow: 0 18px 44px rgba(31, 42, 68, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 16px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.6rem, 4vw, 2.4rem);
    }

    a.back {
      color: var(--accent);
      text-decoration: none;
      font-weight: 600;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      border: 1px solid rgba(10, 123, 194, 0.25);
      border-radius: 16px;
      padding: 16px;
      display: grid;
      gap: 6px;
      text-align: center;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent);
    }

    .chart-card {
      display: grid;
      justify-items: center;
      gap: 12px;
    }

    #chart text {
      font-family: inherit;
    }

    .slice {
      cursor: pointer;
      stroke: white;
      stroke-width: 1;
    }

    .slice:hover {
      opacity: 0.85;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      justify-content: center;
      gap: 8px 16px;
      padding: 0;
      margin: 0;
      list-style: none;
    }

    .legend li {
      display: inline-flex;
      align-items: center;
      gap: 6px;
      cursor: pointer;
    }

    .legend .swatch {
      width: 12px;
      height: 12px;
      border-radius: 3px;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(31, 42, 68, 0.1);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .status {
      min-height: 1.2em;
      color: #c63b2b;
    }
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Olympic Games</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Medals per Country</h1>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Number of JOs</span>
        <span id="olympiads" class="value">{{OLYMPIADS}}</span>
      </div>
      <div class="stat">
        <span class="label">Number of countries</span>
        <span id="countries" class="value">{{COUNTRIES}}</span>
      </div>
    </section>

    <section class="chart-card">
      <svg id="chart" width="700" height="400" aria-label="Medals per country" role="img"></svg>
      <ul id="legend" class="legend"></ul>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const SVG_NS = 'http://www.w3.org/2000/svg';
    const chartEl = document.getElementById('chart');
    const legendEl = document.getElementById('legend');
    const countriesEl = document.getElementById('countries');
    const olympiadsEl = document.getElementById('olympiads');
    const statusEl = document.getElementById('status');

    const setStatus = (message) => {
      statusEl.textContent = message;
    };

    const select = async (name) => {
      const res = await fetch(`/api/select?label=${encodeURIComponent(name)}`);
      if (!res.ok) {
        throw new Error('Unable to open country');
      }
      const body = await res.json();
      if (body.route) {
        window.location.href = body.route;
      }
    };

    const onSelect = (name) => {
      select(name).catch((err) => setStatus(err.message));
    };

    const slicePath = (cx, cy, r, start, end) => {
      const x1 = cx + r * Math.cos(start);
      const y1 = cy + r * Math.sin(start);
      const x2 = cx + r * Math.cos(end);
      const y2 = cy + r * Math.sin(end);
      const largeArc = end - start > Math.PI ? 1 : 0;
      return `M ${cx} ${cy} L ${x1.toFixed(2)} ${y1.toFixed(2)} A ${r} ${r} 0 ${largeArc} 1 ${x2.toFixed(2)} ${y2.toFixed(2)} Z`;
    };

    const renderPie = (points, colors, width, height) => {
      chartEl.setAttribute('width', width);
      chartEl.setAttribute('height', height);
      chartEl.setAttribute('viewBox', `0 0 ${width} ${height}`);
      chartEl.replaceChildren();

      const total = points.reduce((sum, point) => sum + point.value, 0);
      if (!total) {
        const empty = document.createElementNS(SVG_NS, 'text');
        empty.setAttribute('class', 'chart-label');
        empty.setAttribute('x', '50%');
        empty.setAttribute('y', '50%');
        empty.setAttribute('text-anchor', 'middle');
        empty.textContent = 'No data';
        chartEl.appendChild(empty);
        return;
      }

      const cx = width / 2;
      const cy = height / 2;
      const r = Math.min(width, height) / 2 - 10;
      let angle = -Math.PI / 2;

      points.forEach((point, index) => {
        const sweep = (point.value / total) * Math.PI * 2;
        const color = colors[index % colors.length];
        let shape;
        if (sweep >= Math.PI * 2 - 1e-9) {
          shape = document.createElementNS(SVG_NS, 'circle');
          shape.setAttribute('cx', cx);
          shape.setAttribute('cy', cy);
          shape.setAttribute('r', r);
        } else {
          shape = document.createElementNS(SVG_NS, 'path');
          shape.setAttribute('d', slicePath(cx, cy, r, angle, angle + sweep));
        }
        shape.setAttribute('class', 'slice');
        shape.setAttribute('fill', color);
        const title = document.createElementNS(SVG_NS, 'title');
        title.textContent = `${point.name}: ${point.value}`;
        shape.appendChild(title);
        shape.addEventListener('click', () => onSelect(point.name));
        chartEl.appendChild(shape);
        angle += sweep;
      });
    };

    const renderLegend = (points, colors, visible) => {
      legendEl.replaceChildren();
      legendEl.style.display = visible ? '' : 'none';
      points.forEach((point, index) => {
        const item = document.createElement('li');
        const swatch = document.createElement('span');
        swatch.className = 'swatch';
        swatch.style.background = colors[index % colors.length];
        const label = document.createElement('span');
        label.textContent = point.name;
        item.append(swatch, label);
        item.addEventListener('click', () => onSelect(point.name));
        legendEl.appendChild(item);
      });
    };

    const render = (home) => {
      countriesEl.textContent = home.number_of_countries;
      olympiadsEl.textContent = home.number_of_olympiads;
      renderPie(home.chart, home.colors, home.view.width, home.view.height);
      renderLegend(home.chart, home.colors, home.show_legend);
    };

    const load = async () => {
      const res = await fetch(`/api/home?width=${window.innerWidth}`);
      if (!res.ok) {
        throw new Error('Unable to load olympic data');
      }
      render(await res.json());
    };

    window.addEventListener('resize', () => {
      load().catch((err) => setStatus(err.message));
    });

    load().catch((err) => setStatus(err.message));
  </script>
</body>
</html>
"#;

const COUNTRY_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Olympic Games</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <header>
      <h1 id="country">Country</h1>
      <a class="back" href="/">Back to all countries</a>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Number of entries</span>
        <span id="participations" class="value">{{PARTICIPATIONS}}</span>
      </div>
      <div class="stat">
        <span class="label">Total number of medals</span>
        <span id="medals" class="value">{{MEDALS}}</span>
      </div>
      <div class="stat">
        <span class="label">Total number of athletes</span>
        <span id="athletes" class="value">{{ATHLETES}}</span>
      </div>
    </section>

    <section class="chart-card">
      <svg id="chart" width="700" height="400" aria-label="Medals per Olympiad" role="img"></svg>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const chartEl = document.getElementById('chart');
    const countryEl = document.getElementById('country');
    const participationsEl = document.getElementById('participations');
    const medalsEl = document.getElementById('medals');
    const athletesEl = document.getElementById('athletes');
    const statusEl = document.getElementById('status');
    const countryId = window.location.pathname.split('/').pop();

    const setStatus = (message) => {
      statusEl.textContent = message;
    };

    const escapeText = (value) =>
      String(value).replace(/[&<>"']/g, (ch) => `&#${ch.charCodeAt(0)};`);

    const renderLineChart = (points, width, height) => {
      chartEl.setAttribute('width', width);
      chartEl.setAttribute('height', height);
      chartEl.setAttribute('viewBox', `0 0 ${width} ${height}`);

      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data</text>';
        return;
      }

      const paddingX = 48;
      const paddingY = 40;
      const top = 20;

      const values = points.map((point) => point.value);
      const min = 0;
      let max = Math.max(...values, 0);
      if (max === min) {
        max += 1;
      }

      const range = max - min;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => (points.length > 1 ? paddingX + index * xStep : width / 2);
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`)
        .join(' ');

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${Math.round(value)}</text>`;
      }

      const xLabels = points
        .map((point, index) => `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${escapeText(point.name)}</text>`)
        .join('');

      const circles = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.value)}" r="4"><title>${escapeText(point.name)}: ${point.value}</title></circle>`)
        .join('');

      const axisLabels = `
        <text class="chart-label" x="${width / 2}" y="${height - 6}" text-anchor="middle">Dates</text>
        <text class="chart-label" x="12" y="${height / 2}" text-anchor="middle" transform="rotate(-90 12 ${height / 2})">Medals</text>
      `;

      chartEl.innerHTML = `
        ${grid}
        <path class="chart-line" d="${path}" />
        ${circles}
        ${xLabels}
        ${axisLabels}
      `;
    };

    const render = (detail) => {
      if (detail.country) {
        countryEl.textContent = detail.country;
        document.title = `${detail.country} | Olympic Games`;
      }
      participationsEl.textContent = detail.summary.participations;
      medalsEl.textContent = detail.summary.total_medals;
      athletesEl.textContent = detail.summary.total_athletes;
      const series = detail.chart.length ? detail.chart[0].series : [];
      renderLineChart(series, detail.view.width, detail.view.height);
    };

    const load = async () => {
      const res = await fetch(`/api/country/${encodeURIComponent(countryId)}?width=${window.innerWidth}`);
      if (!res.ok) {
        throw new Error('Unable to load country data');
      }
      render(await res.json());
    };

    window.addEventListener('resize', () => {
      load().catch((err) => setStatus(err.message));
    });

    load().catch((err) => setStatus(err.message));
  </script>
</body>
</html>
"#;
