use crate::models::Draft;

pub fn render_index(draft: &Draft) -> String {
    INDEX_HTML
        .replace("{{DATE}}", &draft.date)
        .replace("{{SCORE}}", &draft.score.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Board</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f3f0fa;
      --bg-2: #cdb9f0;
      --ink: #2b2a33;
      --accent: #667eea;
      --accent-2: #764ba2;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(80, 60, 140, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e8defa 60%, #f5f1fb 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c6e;
      font-size: 1rem;
    }

    .panel {
      background: rgba(255, 255, 255, 0.7);
      border-radius: 20px;
      padding: 24px;
      display: grid;
      gap: 16px;
    }

    .panel h2 {
      margin: 0;
      font-size: 1.1rem;
      font-weight: 600;
      letter-spacing: 0.02em;
      text-transform: uppercase;
      color: var(--accent-2);
    }

    .mood-value {
      font-size: 2.4rem;
      font-weight: 600;
      text-align: center;
    }

    input[type="range"] {
      width: 100%;
      accent-color: var(--accent);
    }

    .tags {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    .tag {
      border: 1px solid rgba(102, 126, 234, 0.4);
      border-radius: 999px;
      background: transparent;
      padding: 8px 16px;
      font-size: 0.95rem;
      font-family: inherit;
      cursor: pointer;
      transition: all 140ms ease;
    }

    .tag.selected {
      background: linear-gradient(135deg, var(--accent), var(--accent-2));
      border-color: transparent;
      color: #fff;
    }

    textarea {
      width: 100%;
      min-height: 88px;
      border: 1px solid rgba(102, 126, 234, 0.3);
      border-radius: 14px;
      padding: 12px;
      font-family: inherit;
      font-size: 0.95rem;
      resize: vertical;
    }

    .save-row {
      display: flex;
      align-items: center;
      gap: 14px;
    }

    button.save {
      border: none;
      border-radius: 999px;
      padding: 12px 28px;
      font-size: 1rem;
      font-family: inherit;
      font-weight: 600;
      color: #fff;
      background: linear-gradient(135deg, var(--accent), var(--accent-2));
      cursor: pointer;
      transition: transform 140ms ease;
    }

    button.save:hover {
      transform: translateY(-1px);
    }

    .status {
      font-size: 0.95rem;
      min-height: 1.2em;
    }

    .status.ok { color: #28a745; }
    .status.error { color: #c0392b; }

    .stats-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 14px;
    }

    .stat-card {
      background: rgba(255, 255, 255, 0.85);
      border-radius: 16px;
      padding: 16px;
      text-align: center;
      display: grid;
      gap: 4px;
    }

    .stat-number {
      font-size: 1.8rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat-label {
      font-size: 0.85rem;
      color: #5f5c6e;
    }

    .common-tag {
      text-align: center;
      color: #5f5c6e;
      font-size: 0.9rem;
    }

    .common-tag strong { color: var(--accent); }

    .history {
      display: grid;
      gap: 12px;
      max-height: 420px;
      overflow-y: auto;
    }

    .entry {
      background: rgba(255, 255, 255, 0.85);
      border-radius: 16px;
      padding: 14px 18px;
      display: grid;
      gap: 6px;
    }

    .entry-date {
      font-size: 0.85rem;
      color: #5f5c6e;
    }

    .entry-score {
      font-size: 1.1rem;
      font-weight: 600;
    }

    .entry-tags {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
    }

    .entry-tag {
      background: rgba(102, 126, 234, 0.14);
      border-radius: 999px;
      padding: 3px 10px;
      font-size: 0.8rem;
      color: var(--accent-2);
    }

    .entry-note {
      font-size: 0.9rem;
      color: #44424e;
      font-style: italic;
    }

    .empty {
      text-align: center;
      color: #666;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(14px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Mood Board</h1>
      <p class="subtitle">How are you feeling today? &mdash; {{DATE}}</p>
    </header>

    <section class="panel">
      <h2>Today's mood</h2>
      <div class="mood-value" id="mood-value">{{SCORE}}</div>
      <input type="range" id="mood-slider" min="1" max="10" step="1" value="{{SCORE}}" />
      <div class="tags" id="tags">
        <button class="tag" data-tag="happy">happy</button>
        <button class="tag" data-tag="calm">calm</button>
        <button class="tag" data-tag="energetic">energetic</button>
        <button class="tag" data-tag="grateful">grateful</button>
        <button class="tag" data-tag="tired">tired</button>
        <button class="tag" data-tag="anxious">anxious</button>
        <button class="tag" data-tag="stressed">stressed</button>
        <button class="tag" data-tag="sad">sad</button>
      </div>
      <textarea id="note" placeholder="Anything worth remembering about today?"></textarea>
      <div class="save-row">
        <button class="save" id="save">Save mood</button>
        <span class="status" id="status"></span>
      </div>
    </section>

    <section class="panel">
      <h2>Statistics</h2>
      <div class="stats-grid" id="stats"></div>
      <div class="common-tag" id="common-tag"></div>
    </section>

    <section class="panel">
      <h2>History</h2>
      <div class="history" id="history"></div>
    </section>
  </main>

  <script>
    const slider = document.getElementById('mood-slider');
    const moodValue = document.getElementById('mood-value');
    const tagsEl = document.getElementById('tags');
    const noteEl = document.getElementById('note');
    const saveButton = document.getElementById('save');
    const statusEl = document.getElementById('status');
    const statsEl = document.getElementById('stats');
    const commonTagEl = document.getElementById('common-tag');
    const historyEl = document.getElementById('history');

    let statusTimer = null;

    const moodEmoji = (score) => {
      if (score <= 2) return '\u{1F622}';
      if (score <= 4) return '\u{1F614}';
      if (score <= 6) return '\u{1F610}';
      if (score <= 8) return '\u{1F642}';
      return '\u{1F60A}';
    };

    const setStatus = (message, kind) => {
      statusEl.textContent = message;
      statusEl.className = 'status' + (kind ? ' ' + kind : '');
    };

    const flashStatus = (message, kind) => {
      setStatus(message, kind);
      clearTimeout(statusTimer);
      statusTimer = setTimeout(() => setStatus('', ''), 2000);
    };

    const post = async (path, body) => {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const renderDraft = (draft) => {
      slider.value = draft.score;
      moodValue.textContent = draft.score + ' ' + moodEmoji(draft.score);
      if (document.activeElement !== noteEl) {
        noteEl.value = draft.note;
      }
      for (const chip of tagsEl.querySelectorAll('.tag')) {
        chip.classList.toggle('selected', draft.tags.includes(chip.dataset.tag));
      }
    };

    const renderStats = (stats) => {
      if (stats.total_entries === 0) {
        statsEl.innerHTML = '<p class="empty">No data yet</p>';
        commonTagEl.textContent = '';
        return;
      }
      const cards = [
        [stats.total_entries, 'Days recorded'],
        [stats.average_score.toFixed(1), 'Average mood'],
        [stats.best_score, 'Best mood'],
        [stats.recent_average.toFixed(1), 'Last 7 entries']
      ];
      statsEl.innerHTML = cards.map(([value, label]) =>
        '<div class="stat-card"><div class="stat-number">' + value +
        '</div><div class="stat-label">' + label + '</div></div>'
      ).join('');
      commonTagEl.innerHTML = 'Most common mood: <strong>' + stats.most_common_tag + '</strong>';
    };

    const escapeHtml = (text) => {
      const div = document.createElement('div');
      div.textContent = text;
      return div.innerHTML;
    };

    const renderHistory = (entries) => {
      if (entries.length === 0) {
        historyEl.innerHTML = '<p class="empty">No entries yet. Record your first mood!</p>';
        return;
      }
      historyEl.innerHTML = entries.map((entry) => {
        const tags = entry.tags.map((tag) =>
          '<span class="entry-tag">' + escapeHtml(tag) + '</span>'
        ).join('');
        const note = entry.note
          ? '<div class="entry-note">&ldquo;' + escapeHtml(entry.note) + '&rdquo;</div>'
          : '';
        return '<div class="entry">' +
          '<div class="entry-date">' + entry.date + '</div>' +
          '<div class="entry-score">' + entry.score + '/10 ' + moodEmoji(entry.score) + '</div>' +
          '<div class="entry-tags">' + tags + '</div>' +
          note +
          '</div>';
      }).join('');
    };

    const loadAll = async () => {
      const [draft, history, stats] = await Promise.all([
        fetch('/api/draft').then((r) => r.json()),
        fetch('/api/history').then((r) => r.json()),
        fetch('/api/stats').then((r) => r.json())
      ]);
      renderDraft(draft);
      renderHistory(history);
      renderStats(stats);
    };

    slider.addEventListener('input', () => {
      const score = parseInt(slider.value, 10);
      moodValue.textContent = score + ' ' + moodEmoji(score);
      post('/api/draft/score', { score }).catch((err) => setStatus(err.message, 'error'));
    });

    tagsEl.addEventListener('click', (event) => {
      const chip = event.target.closest('.tag');
      if (!chip) return;
      post('/api/draft/tag', { tag: chip.dataset.tag })
        .then(renderDraft)
        .catch((err) => setStatus(err.message, 'error'));
    });

    noteEl.addEventListener('change', () => {
      post('/api/draft/note', { note: noteEl.value })
        .catch((err) => setStatus(err.message, 'error'));
    });

    saveButton.addEventListener('click', () => {
      post('/api/save', {})
        .then((result) => {
          renderDraft(result.draft);
          noteEl.value = '';
          renderHistory(result.history);
          renderStats(result.stats);
          flashStatus('Saved!', 'ok');
        })
        .catch((err) => flashStatus(err.message, 'error'));
    });

    loadAll().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
