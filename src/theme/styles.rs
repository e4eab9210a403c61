//! Global CSS styles for the Bodsphere landing page.
//!
//! Rose-on-blush palette, rounded cards, gradient highlights. Entrance
//! animations read `--enter-duration` and `--enter-delay` set inline by
//! `bodsphere_core::motion::Entrance::style`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* ROSE (Primary, highlights) */
  --primary: #f43f5e;
  --primary-hover: #e11d48;
  --primary-soft: rgba(244, 63, 94, 0.1);
  --rose-300: #fda4af;
  --rose-500: #f43f5e;
  --pink-500: #ec4899;

  /* BLUSH (Backgrounds) */
  --blush-50: #fff1f2;
  --pink-50: #fdf2f8;
  --rose-100: #ffe4e6;
  --white: #ffffff;

  /* INK (Text) */
  --ink: #111827;
  --gray-700: #374151;
  --gray-600: #4b5563;
  --gray-500: #6b7280;
  --gray-400: #9ca3af;
  --gray-100: #f3f4f6;

  /* Gradients */
  --brand-gradient: linear-gradient(90deg, var(--primary), var(--pink-500));

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, -apple-system, sans-serif;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-3xl: 2.25rem;
  --text-5xl: 3rem;
  --text-6xl: 3.75rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
}

body {
  font-family: var(--font-sans);
  color: var(--ink);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

.visually-hidden {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0 0 0 0);
  white-space: nowrap;
}

/* === Page Layout === */
.landing {
  height: 100vh;
  overflow-y: auto;
  overflow-x: hidden;
  scroll-behavior: smooth;
  background: linear-gradient(180deg, var(--blush-50), var(--pink-50));
}

.container {
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1rem;
}

.text-gradient {
  background: var(--brand-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

/* === Entrance Animations === */
@keyframes enter-fade-up {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes enter-scale-in {
  from { opacity: 0; transform: scale(0.8); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes enter-slide-up {
  from { opacity: 0; transform: translateY(100px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes enter-logo {
  from { transform: rotate(-10deg) scale(0.9); }
  to { transform: rotate(0) scale(1); }
}

.enter-fade-up,
.enter-scale-in,
.enter-slide-up,
.enter-logo {
  animation-duration: var(--enter-duration, 600ms);
  animation-delay: var(--enter-delay, 0ms);
  animation-timing-function: ease-out;
  animation-fill-mode: both;
}

.enter-fade-up { animation-name: enter-fade-up; }
.enter-scale-in { animation-name: enter-scale-in; }
.enter-slide-up { animation-name: enter-slide-up; }
.enter-logo { animation-name: enter-logo; }

/* Reveal blocks hold still until they scroll into view */
.reveal:not(.in-view) {
  animation: none;
  opacity: 0;
}

@media (prefers-reduced-motion: reduce) {
  .enter-fade-up, .enter-scale-in, .enter-slide-up, .enter-logo {
    animation: none;
  }
  .reveal:not(.in-view) { opacity: 1; }
}

/* === Icons === */
.icon { display: inline-block; vertical-align: middle; flex-shrink: 0; }
.icon-trailing { margin-left: 0.5rem; }

/* === Buttons === */
.btn-primary,
.btn-outline,
.btn-inverse,
.btn-floating,
.btn-ghost {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.25rem;
  border-radius: 0.5rem;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  font-weight: 600;
  padding: 0.625rem 1.25rem;
  cursor: pointer;
  transition: all var(--transition-normal);
}

.btn-primary {
  background: var(--primary);
  border: 1px solid var(--primary);
  color: var(--white);
}

.btn-primary:hover { background: var(--primary-hover); }

.btn-outline {
  background: transparent;
  border: 1px solid var(--primary);
  color: var(--primary);
}

.btn-outline:hover { background: var(--primary-soft); }

.btn-inverse {
  background: var(--white);
  border: 1px solid var(--white);
  color: var(--primary);
}

.btn-inverse:hover { background: rgba(255, 255, 255, 0.9); }

.btn-ghost {
  background: rgba(17, 24, 39, 0.6);
  border: none;
  color: var(--white);
}

.btn-floating {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 50;
  padding: 1rem 1.5rem;
  border: none;
  border-radius: 9999px;
  background: linear-gradient(90deg, #ef4444, var(--rose-500));
  color: var(--white);
  font-size: var(--text-lg);
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.btn-floating:hover {
  transform: scale(1.05);
  box-shadow: 0 0 15px rgba(244, 114, 182, 0.6);
}

.btn-large {
  padding: 1.25rem 2rem;
  font-size: var(--text-lg);
}

.press:hover { transform: scale(1.05); }
.press:active { transform: scale(0.95); }

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

/* === Header === */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background: transparent;
  transition: all var(--transition-normal);
}

.site-header.scrolled {
  background: rgba(255, 255, 255, 0.8);
  backdrop-filter: blur(12px);
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding-top: 1rem;
  padding-bottom: 1rem;
}

.logo {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.logo-mark,
.member-avatar,
.author-avatar {
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 9999px;
  background: var(--brand-gradient);
  color: var(--white);
  font-weight: 700;
}

.logo-mark { width: 2.5rem; height: 2.5rem; font-size: var(--text-xl); }

.logo-word {
  font-size: var(--text-xl);
  font-weight: 700;
}

/* === Hero === */
.hero {
  position: relative;
  overflow: hidden;
  padding: 10rem 2.5rem 8rem;
}

.hero-blob {
  position: absolute;
  border-radius: 9999px;
  filter: blur(64px);
  opacity: 0.2;
  z-index: 0;
}

.hero-blob-top { top: 5rem; right: 0; width: 18rem; height: 18rem; background: var(--primary); }
.hero-blob-bottom { bottom: 2.5rem; left: 2.5rem; width: 20rem; height: 20rem; background: var(--rose-300); }

.hero-inner {
  position: relative;
  z-index: 10;
  display: flex;
  align-items: center;
  gap: 3rem;
}

.hero-copy,
.hero-visual { flex: 1 1 50%; }

.hero-title {
  font-size: var(--text-6xl);
  font-weight: 700;
  line-height: 1.15;
  margin-bottom: 1.5rem;
}

.hero-body {
  font-size: var(--text-lg);
  color: var(--gray-700);
  max-width: 32rem;
  margin-bottom: 2rem;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
}

.hero-members {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-top: 2rem;
}

.member-avatar { width: 5rem; height: 5rem; font-size: var(--text-3xl); border: 2px solid var(--white); }
.member-badge { font-weight: 500; }
.member-caption { font-size: var(--text-sm); color: var(--gray-500); }

.hero-card {
  position: relative;
  border-radius: 1rem;
  overflow: hidden;
  border: 1px solid rgba(255, 255, 255, 0.2);
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
  background: linear-gradient(135deg, rgba(255, 255, 255, 0.6), rgba(255, 255, 255, 0.2));
}

.hero-art {
  aspect-ratio: 1 / 1;
  background:
    radial-gradient(circle at 30% 30%, rgba(253, 164, 175, 0.8), transparent 60%),
    radial-gradient(circle at 70% 70%, rgba(236, 72, 153, 0.6), transparent 55%),
    var(--rose-100);
}

.hero-card-caption {
  position: absolute;
  left: 1rem;
  right: 1rem;
  bottom: 1rem;
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem;
  border-radius: 0.5rem;
  background: rgba(255, 255, 255, 0.8);
  backdrop-filter: blur(4px);
}

.hero-card-caption h3 { font-size: var(--text-base); font-weight: 500; }
.hero-card-caption p { font-size: var(--text-sm); color: var(--gray-600); }

.instructor-avatar {
  width: 3rem;
  height: 3rem;
  border-radius: 9999px;
  background: var(--brand-gradient);
  flex-shrink: 0;
}

/* === Section Headings === */
.section-heading {
  text-align: center;
  margin-bottom: 4rem;
}

.section-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  margin-bottom: 1rem;
}

.section-lead {
  color: var(--gray-600);
  max-width: 42rem;
  margin: 0 auto;
}

/* === Demo Video === */
.demo-section { padding: 5rem 0; background: var(--white); }

.video-frame {
  position: relative;
  max-width: 56rem;
  margin: 0 auto;
  border-radius: 1rem;
  overflow: hidden;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
  background: var(--ink);
}

.demo-video { display: block; width: 100%; aspect-ratio: 16 / 9; object-fit: cover; }

.video-mute {
  position: absolute;
  right: 1rem;
  bottom: 1rem;
  gap: 0.5rem;
  border-radius: 9999px;
}

/* === Features === */
.features-section { padding: 5rem 0; background: var(--white); }

.features-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 2rem;
}

.feature-card {
  padding: 1.5rem;
  border-radius: 0.75rem;
  border: 1px solid var(--rose-100);
  background: linear-gradient(135deg, var(--blush-50), var(--pink-50));
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
  transition: box-shadow var(--transition-normal);
}

.feature-card:hover { box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }

.feature-icon {
  width: 3rem;
  height: 3rem;
  margin-bottom: 1rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 9999px;
  background: var(--brand-gradient);
  color: var(--white);
}

.feature-card h3 { font-size: var(--text-xl); font-weight: 600; margin-bottom: 0.5rem; }
.feature-card p { color: var(--gray-600); }

/* === Stats === */
.stats-section {
  background: var(--brand-gradient);
  color: var(--white);
}

.stats-panel {
  padding: 2rem;
  border-radius: 0.75rem;
  border: 1px solid rgba(255, 255, 255, 0.2);
  background: rgba(255, 255, 255, 0.1);
  backdrop-filter: blur(4px);
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2rem;
  text-align: center;
}

.stat {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.stat-value {
  font-size: var(--text-5xl);
  font-weight: 700;
  margin-bottom: 0.5rem;
  font-variant-numeric: tabular-nums;
}

.stat-label {
  font-size: var(--text-lg);
  color: rgba(255, 255, 255, 0.8);
}

/* === Testimonials === */
.testimonials-section { padding: 5rem 0; background: var(--white); }

.testimonials-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2rem;
}

.testimonial-card {
  padding: 1.5rem;
  border-radius: 0.75rem;
  border: 1px solid var(--gray-100);
  background: var(--white);
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07);
}

.testimonial-author {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-bottom: 1rem;
}

.author-avatar { width: 3rem; height: 3rem; font-size: var(--text-xl); }
.testimonial-author h3 { font-weight: 600; font-size: var(--text-base); }
.author-role { font-size: var(--text-sm); color: var(--gray-500); }
.testimonial-quote { color: var(--gray-600); font-style: italic; }

.star-rating { display: flex; margin-top: 1rem; color: var(--primary); }

/* === Pricing === */
.pricing-section { padding: 5rem 0; }

.billing-toggle {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  margin: -2rem 0 3rem;
}

.billing-option {
  padding: 0.5rem 1.25rem;
  border: 1px solid var(--primary);
  border-radius: 9999px;
  background: transparent;
  color: var(--primary);
  font-weight: 600;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.billing-option.selected {
  background: var(--primary);
  color: var(--white);
}

.billing-savings {
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--primary-hover);
}

.pricing-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2rem;
  align-items: stretch;
}

.plan-card {
  position: relative;
  display: flex;
  flex-direction: column;
  padding: 2rem;
  border-radius: 1rem;
  border: 1px solid var(--rose-100);
  background: var(--white);
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07);
}

.plan-card.popular {
  border: 2px solid var(--primary);
  box-shadow: 0 20px 25px rgba(244, 63, 94, 0.15);
}

.plan-badge {
  position: absolute;
  top: -0.875rem;
  left: 50%;
  transform: translateX(-50%);
  padding: 0.25rem 0.875rem;
  border-radius: 9999px;
  background: var(--brand-gradient);
  color: var(--white);
  font-size: var(--text-sm);
  font-weight: 600;
}

.plan-name { font-size: var(--text-xl); font-weight: 700; }
.plan-description { color: var(--gray-600); margin: 0.5rem 0 1.5rem; }
.plan-amount { font-size: var(--text-3xl); font-weight: 700; }
.plan-period { color: var(--gray-500); margin-left: 0.25rem; }
.plan-savings { color: var(--primary-hover); font-weight: 600; font-size: var(--text-sm); }

.plan-features {
  list-style: none;
  margin: 1.5rem 0;
  flex: 1;
}

.plan-features li {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.25rem 0;
  color: var(--gray-700);
}

.plan-features .icon { color: var(--primary); }

/* === Call to Action === */
.cta-section {
  padding: 5rem 0;
  background: var(--brand-gradient);
  color: var(--white);
}

.cta-inner {
  max-width: 48rem;
  margin: 0 auto;
  text-align: center;
}

.cta-title { font-size: var(--text-3xl); font-weight: 700; margin-bottom: 1.5rem; }
.cta-body { font-size: var(--text-lg); color: rgba(255, 255, 255, 0.9); margin-bottom: 2rem; }
.cta-fine-print { font-size: var(--text-sm); color: rgba(255, 255, 255, 0.8); }

.subscribe-form {
  display: flex;
  gap: 0.5rem;
  max-width: 28rem;
  margin: 0 auto 2rem;
}

.form-field { flex: 1; }

.input-field {
  width: 100%;
  padding: 0.625rem 0.875rem;
  border-radius: 0.5rem;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  transition: border-color var(--transition-fast);
}

.input-frosted {
  background: rgba(255, 255, 255, 0.2);
  backdrop-filter: blur(4px);
  border: 1px solid rgba(255, 255, 255, 0.3);
  color: var(--white);
}

.input-frosted::placeholder { color: rgba(255, 255, 255, 0.7); }

.input-field:focus {
  outline: none;
  border-color: var(--white);
}

.input-field.invalid { border-color: #fde047; }

.form-error {
  margin: -1rem 0 1.5rem;
  color: #fef08a;
  font-size: var(--text-sm);
}

.subscribe-notice {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  max-width: 28rem;
  margin: -1rem auto 1.5rem;
  padding: 0.75rem 1rem;
  border-radius: 0.5rem;
  background: var(--white);
  color: var(--ink);
  text-align: left;
}

.notice-dismiss {
  border: none;
  background: transparent;
  color: var(--gray-500);
  font-size: var(--text-xl);
  cursor: pointer;
}

/* === Footer === */
.site-footer {
  padding: 1.5rem 0;
  background: var(--ink);
  color: var(--gray-400);
  font-size: var(--text-sm);
  text-align: center;
}

/* === Responsive === */
@media (max-width: 1024px) {
  .features-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (max-width: 768px) {
  .hero { padding: 8rem 0 5rem; }
  .hero-inner { flex-direction: column; }
  .hero-title { font-size: var(--text-3xl); }
  .features-grid,
  .stats-grid,
  .testimonials-grid,
  .pricing-grid { grid-template-columns: 1fr; }
  .subscribe-form { flex-direction: column; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_classes_have_keyframes() {
        use bodsphere_core::Entrance;

        for entrance in [
            Entrance::FadeUp,
            Entrance::ScaleIn,
            Entrance::SlideUp,
            Entrance::LogoSettle,
            Entrance::Card,
        ] {
            let keyframes = format!("@keyframes {}", entrance.class());
            assert!(GLOBAL_STYLES.contains(&keyframes), "missing {keyframes}");
        }
    }

    #[test]
    fn header_states_are_styled() {
        assert!(GLOBAL_STYLES.contains(".site-header.scrolled"));
        assert!(GLOBAL_STYLES.contains(".reveal:not(.in-view)"));
    }
}
