use crate::models::dashboard::Dashboard;

/// Page shell. `__GENERATED_AT__` and `__DASHBOARD_JSON__` are substituted
/// at render time; everything else is fixed markup, styling and the
/// client-side population script.
const TEMPLATE: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>GitHub Dashboard</title>
  <style>
    :root { --bg:#0c1018; --card:#141b28; --line:#23314c; --text:#e6ecf7; --muted:#9fb0cc; --accent:#3dd4a7; --link:#8ab7ff; }
    * { box-sizing: border-box; }
    body { margin:0; font-family:ui-sans-serif,-apple-system,BlinkMacSystemFont,"Segoe UI",sans-serif; color:var(--text); background:radial-gradient(1200px 500px at 20% -10%, #22345d 0%, var(--bg) 55%); }
    .wrap { width:min(1150px,92vw); margin:24px auto 48px; }
    .top { display:flex; justify-content:space-between; align-items:end; gap:12px; margin-bottom:20px; }
    .summary { display:grid; grid-template-columns:repeat(6,minmax(120px,1fr)); gap:10px; margin-bottom:16px; }
    .profile-card { background:var(--card); border:1px solid var(--line); border-radius:12px; padding:12px; margin-bottom:14px; display:flex; align-items:center; gap:12px; }
    .avatar { width:56px; height:56px; border-radius:50%; border:1px solid var(--line); object-fit:cover; background:#0f1522; }
    .profile-title { display:flex; align-items:center; gap:8px; flex-wrap:wrap; }
    .metric { background:linear-gradient(180deg,rgba(255,255,255,0.02),transparent),var(--card); border:1px solid var(--line); border-radius:12px; padding:12px; }
    .metric .label { color:var(--muted); font-size:.78rem; }
    .metric .value { margin-top:6px; color:var(--accent); font-weight:700; font-size:1.35rem; }
    .grid { display:grid; grid-template-columns:repeat(2,minmax(0,1fr)); gap:12px; }
    .panel { background:var(--card); border:1px solid var(--line); border-radius:12px; padding:12px; min-height:220px; }
    ul { margin:0; padding:0; list-style:none; display:flex; flex-direction:column; gap:8px; }
    li { border:1px solid var(--line); border-radius:10px; padding:10px; background:rgba(255,255,255,.01); }
    a { color:var(--link); text-decoration:none; } a:hover { text-decoration:underline; }
    .subtle,.meta,.empty { color:var(--muted); } .meta { margin-top:6px; display:flex; flex-wrap:wrap; gap:10px; font-size:.82rem; }
    .empty { font-style:italic; margin-top:14px; }
    @media (max-width:920px) { .summary { grid-template-columns:repeat(2,minmax(120px,1fr)); } .grid { grid-template-columns:1fr; } }
  </style>
</head>
<body>
  <main class="wrap">
    <section class="top">
      <div>
        <h1 id="title">GitHub Dashboard</h1>
        <p class="subtle">Generated at __GENERATED_AT__</p>
      </div>
    </section>
    <section id="profile" class="profile-card"></section>
    <section id="summary" class="summary"></section>
    <section id="panels" class="grid"></section>
  </main>
  <script>
    const dashboard = __DASHBOARD_JSON__;
    const summaryFields = [
      ["Repos Listed", dashboard.summary.repositories],
      ["Public Repos", dashboard.profile.public_repos],
      ["Followers", dashboard.profile.followers],
      ["Open PRs Authored", dashboard.summary.authored_prs],
      ["Open Issues Authored", dashboard.summary.authored_issues],
      ["Stars (Listed Repos)", dashboard.summary.repo_stars]
    ];
    const topLanguages = (dashboard.languages || []).map((x) => `${x.name} (${x.count})`).join(", ");
    const panels = [
      { title:"Recently Updated Repositories", empty:"No repositories found.", items:dashboard.recent_repositories, renderItem:(item)=>`<a href="${item.url}" target="_blank" rel="noreferrer">${item.name}</a><div class="meta"><span>Updated: ${item.updated_at}</span><span>Stars: ${item.stars}</span><span>Open issues: ${item.open_issues}</span><span>Language: ${item.language || "n/a"}</span><span>${item.visibility}</span></div>` },
      { title:"Open PRs Authored", empty:"No open authored pull requests.", items:dashboard.authored_prs, renderItem:(item)=>`<a href="${item.url}" target="_blank" rel="noreferrer">${item.title}</a><div class="meta"><span>${item.repo}</span><span>Updated: ${item.updated_at}</span></div>` },
      { title:"PRs Requesting Review", empty:"No review requests right now.", items:dashboard.review_requested_prs, renderItem:(item)=>`<a href="${item.url}" target="_blank" rel="noreferrer">${item.title}</a><div class="meta"><span>${item.repo}</span><span>Updated: ${item.updated_at}</span></div>` },
      { title:"Top Languages (Listed Repositories)", empty:"No languages found.", items:dashboard.languages, renderItem:(item)=>`<strong>${item.name}</strong><div class="meta"><span>Repositories: ${item.count}</span></div>` },
      { title:"Assigned Open Issues", empty:"No assigned issues.", items:dashboard.assigned_issues, renderItem:(item)=>`<a href="${item.url}" target="_blank" rel="noreferrer">${item.title}</a><div class="meta"><span>${item.repo}</span><span>Updated: ${item.updated_at}</span></div>` },
      { title:"Authored Open Issues", empty:"No authored open issues.", items:dashboard.authored_issues, renderItem:(item)=>`<a href="${item.url}" target="_blank" rel="noreferrer">${item.title}</a><div class="meta"><span>${item.repo}</span><span>Updated: ${item.updated_at}</span></div>` }
    ];
    document.getElementById("title").textContent = `GitHub Dashboard for ${dashboard.username}`;
    document.getElementById("profile").innerHTML = `
      <img class="avatar" src="${dashboard.profile.avatar_url}" alt="${dashboard.username} avatar" />
      <div>
        <div class="profile-title">
          <a href="${dashboard.profile.html_url}" target="_blank" rel="noreferrer">${dashboard.profile.name}</a>
          <span class="subtle">@${dashboard.username}</span>
        </div>
        <div class="meta">
          ${dashboard.profile.company ? `<span>Company: ${dashboard.profile.company}</span>` : ""}
          ${dashboard.profile.location ? `<span>Location: ${dashboard.profile.location}</span>` : ""}
          <span>Following: ${dashboard.profile.following}</span>
          ${topLanguages ? `<span>Top langs: ${topLanguages}</span>` : ""}
        </div>
        ${dashboard.profile.bio ? `<p class="subtle">${dashboard.profile.bio}</p>` : ""}
      </div>
    `;
    const summaryNode = document.getElementById("summary");
    summaryFields.forEach(([label, value]) => {
      const metric = document.createElement("div");
      metric.className = "metric";
      metric.innerHTML = `<div class="label">${label}</div><div class="value">${value}</div>`;
      summaryNode.appendChild(metric);
    });
    const panelsNode = document.getElementById("panels");
    panels.forEach((panel) => {
      const article = document.createElement("article");
      article.className = "panel";
      const title = document.createElement("h2");
      title.textContent = panel.title;
      article.appendChild(title);
      if (!panel.items || panel.items.length === 0) {
        const empty = document.createElement("p");
        empty.className = "empty";
        empty.textContent = panel.empty;
        article.appendChild(empty);
      } else {
        const list = document.createElement("ul");
        panel.items.forEach((item) => {
          const row = document.createElement("li");
          row.innerHTML = panel.renderItem(item);
          list.appendChild(row);
        });
        article.appendChild(list);
      }
      panelsNode.appendChild(article);
    });
  </script>
</body>
</html>"##;

/// Render the dashboard into a self-contained HTML page. The document is
/// embedded as a JSON literal and all DOM population happens client-side,
/// so the same document always renders the same page.
pub fn render_html(generated_at: &str, dashboard: &Dashboard) -> String {
    let dashboard_json =
        serde_json::to_string(dashboard).unwrap_or_else(|_| "{}".to_string());
    // The timestamp goes in first so the JSON payload is never re-scanned
    // for placeholder text.
    TEMPLATE
        .replace("__GENERATED_AT__", generated_at)
        .replace("__DASHBOARD_JSON__", &dashboard_json)
}
