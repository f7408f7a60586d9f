// Static assets inlined into every generated page.

pub const FONTS_LINK: &str = "https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;600;700&display=swap";

pub const STYLESHEET: &str = r#"
:root {
  --primary: #0f766e;
  --primary-dark: #115e59;
  --accent: #f59e0b;
  --text: #1f2937;
  --muted: #6b7280;
  --surface: #f8fafc;
  --radius: 14px;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
html { scroll-behavior: smooth; }
body { font-family: 'Poppins', sans-serif; color: var(--text); line-height: 1.6; background: #fff; }
a { color: inherit; text-decoration: none; }
img { max-width: 100%; display: block; }
.container { width: min(1120px, 92%); margin: 0 auto; }
.site-nav { position: sticky; top: 0; z-index: 10; background: rgba(255,255,255,0.95); box-shadow: 0 1px 8px rgba(0,0,0,0.06); }
.site-nav .container { display: flex; align-items: center; justify-content: space-between; padding: 1rem 0; }
.brand { font-weight: 700; font-size: 1.25rem; color: var(--primary); }
.nav-links { display: flex; gap: 1.5rem; list-style: none; }
.nav-links a { font-weight: 500; text-transform: capitalize; transition: color .2s; }
.nav-links a:hover { color: var(--primary); }
.hero { position: relative; min-height: 78vh; display: flex; align-items: center; color: #fff; overflow: hidden; }
.hero-image { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; z-index: 0; }
.hero::before { content: ""; position: absolute; inset: 0; z-index: 1; background: linear-gradient(120deg, rgba(15,118,110,0.88), rgba(17,94,89,0.55)); }
.hero .container { position: relative; z-index: 2; }
.hero-niche { display: inline-block; padding: .35rem .9rem; border-radius: 999px; background: rgba(255,255,255,0.18); font-size: .9rem; letter-spacing: .04em; text-transform: uppercase; }
.hero h1 { font-size: clamp(2.2rem, 5vw, 3.6rem); margin: 1rem 0; }
.hero p { max-width: 620px; font-size: 1.1rem; opacity: .92; }
.btn { display: inline-block; margin-top: 1.75rem; padding: .85rem 1.8rem; border-radius: 999px; background: var(--accent); color: #111827; font-weight: 600; transition: transform .2s; }
.btn:hover { transform: translateY(-2px); }
section { padding: 5rem 0; }
.section-title { font-size: 2rem; margin-bottom: 2rem; text-align: center; }
.about-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
.about-grid img { border-radius: var(--radius); box-shadow: 0 12px 30px rgba(0,0,0,0.12); }
.about-text p { color: var(--muted); margin-top: 1rem; }
.card-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; list-style: none; }
.card { padding: 1.75rem; border-radius: var(--radius); background: var(--surface); border-top: 4px solid var(--primary); font-weight: 500; }
.achievements { background: var(--surface); }
.achievement-list { list-style: none; max-width: 760px; margin: 0 auto; }
.achievement-list li { padding: 1rem 1.25rem; margin-bottom: .75rem; background: #fff; border-left: 4px solid var(--accent); border-radius: 8px; }
.slider { position: relative; max-width: 760px; margin: 0 auto; overflow: hidden; }
.slides { display: flex; transition: transform .5s ease; }
.slide { min-width: 100%; text-align: center; padding: 1rem 2rem; }
.slide img { width: 96px; height: 96px; object-fit: cover; border-radius: 50%; margin: 0 auto 1rem; }
.slide blockquote { font-style: italic; color: var(--muted); }
.slider-dots { display: flex; justify-content: center; gap: .5rem; margin-top: 1rem; }
.slider-dots button { width: 10px; height: 10px; border-radius: 50%; border: none; background: #cbd5e1; cursor: pointer; }
.slider-dots button.active { background: var(--primary); }
.faq { background: var(--surface); }
.accordion { max-width: 760px; margin: 0 auto; }
.accordion-item { background: #fff; border-radius: 10px; margin-bottom: .75rem; overflow: hidden; }
.accordion-header { width: 100%; text-align: left; padding: 1.1rem 1.25rem; font: inherit; font-weight: 600; background: none; border: none; cursor: pointer; display: flex; justify-content: space-between; }
.accordion-header::after { content: "+"; color: var(--primary); }
.accordion-header[aria-expanded="true"]::after { content: "\2212"; }
.accordion-panel { padding: 0 1.25rem 1.1rem; color: var(--muted); }
.accordion-panel[hidden] { display: none; }
.contact { text-align: center; background: var(--primary); color: #fff; }
.contact p { opacity: .9; }
.site-footer { padding: 2rem 0; text-align: center; font-size: .9rem; color: var(--muted); }
@media (max-width: 768px) {
  .about-grid { grid-template-columns: 1fr; }
  .nav-links { display: none; }
}
"#;

/// Accordion toggling and the testimonial slider.
pub const SCRIPT: &str = r#"
document.querySelectorAll('.accordion-header').forEach(function (header) {
  header.addEventListener('click', function () {
    var panel = document.getElementById(header.getAttribute('aria-controls'));
    var open = header.getAttribute('aria-expanded') === 'true';
    header.setAttribute('aria-expanded', String(!open));
    panel.hidden = open;
  });
});
(function () {
  var slides = document.querySelector('.slides');
  var dots = document.querySelectorAll('.slider-dots button');
  if (!slides || dots.length === 0) return;
  var current = 0;
  function show(index) {
    current = index;
    slides.style.transform = 'translateX(-' + (index * 100) + '%)';
    dots.forEach(function (dot, i) { dot.classList.toggle('active', i === index); });
  }
  dots.forEach(function (dot, i) { dot.addEventListener('click', function () { show(i); }); });
  setInterval(function () { show((current + 1) % dots.length); }, 5000);
})();
"#;
