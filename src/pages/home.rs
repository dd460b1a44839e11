use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::contact::ContactSection;
use crate::components::fade_in::FadeInSection;
use crate::components::footer::Footer;
use crate::components::match_card::MatchCard;
use crate::components::player_card::PlayerCard;
use crate::components::stat_feature::StatFeature;
use crate::data::{MATCHES, PLAYERS, SEASON_STATS};

const HERO_STATS: &[(&str, &str)] = &[
    ("2.4M", "Игроков онлайн"),
    ("156", "Матчей сегодня"),
    ("$12M", "Призовой фонд"),
    ("48", "Турниров"),
];

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1542751371-adc38448a05e?w=1920&q=80";
const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1538481199705-c710c4e965fc?w=800&q=80";

pub fn scroll_to_section(id: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Start from the top when the page mounts.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let scroll_to = |target: &'static str| Callback::from(move |_: MouseEvent| scroll_to_section(target));

    html! {
        <div class="home-page">
            <style>{HOME_CSS}</style>

            <header class="hero">
                <div
                    class="hero-background"
                    style={format!("background-image: url('{}');", HERO_IMAGE)}
                ></div>
                <div class="container hero-content">
                    <div class="hero-inner">
                        <span class="live-badge">
                            <span class="live-dot"></span>
                            {"Прямой эфир: NAVI vs FaZe"}
                        </span>
                        <h1 class="hero-title">
                            {"МИР "}<span class="hero-title-accent">{"CS:GO"}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"Актуальная статистика, расписание матчей, рейтинги игроков и все новости из мира Counter-Strike в одном месте"}
                        </p>
                        <div class="hero-cta-group">
                            <button class="hero-cta" onclick={scroll_to("matches")}>
                                {"▶ Смотреть матчи"}
                            </button>
                            <button class="hero-cta secondary" onclick={scroll_to("stats")}>
                                {"📊 Статистика"}
                            </button>
                        </div>

                        <div class="hero-stats">
                            {
                                HERO_STATS.iter().enumerate().map(|(index, (value, label))| {
                                    let accent = index % 2 == 1;
                                    html! {
                                        <div class="hero-stat-card" key={*value}>
                                            <div class={classes!("hero-stat-value", accent.then(|| "accent"))}>{*value}</div>
                                            <div class="hero-stat-label">{*label}</div>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>
            </header>

            <section id="matches" class="matches-section">
                <div class="container">
                    <FadeInSection>
                        <div class="matches-header">
                            <div class="section-heading">
                                <h2>{"Ближайшие "}<span class="accent">{"матчи"}</span></h2>
                                <p>{"Расписание турниров и прямые трансляции"}</p>
                            </div>
                            <button class="all-matches-link">{"Все матчи →"}</button>
                        </div>
                    </FadeInSection>

                    <div class="match-list">
                        {
                            MATCHES.iter().enumerate().map(|(index, info)| {
                                html! {
                                    <FadeInSection key={info.tournament} delay_ms={(index as u32) * 100}>
                                        <MatchCard info={info.clone()} />
                                    </FadeInSection>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="players" class="players-section">
                <div class="container">
                    <FadeInSection>
                        <div class="section-heading centered">
                            <h2>{"Топ "}<span class="accent">{"игроки"}</span></h2>
                            <p>{"Рейтинг лучших игроков на основе статистики последних 3 месяцев"}</p>
                        </div>
                    </FadeInSection>

                    <div class="players-grid">
                        {
                            PLAYERS.iter().enumerate().map(|(index, player)| {
                                html! {
                                    <FadeInSection key={player.name} delay_ms={(index as u32) * 100}>
                                        <PlayerCard player={player.clone()} />
                                    </FadeInSection>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="stats" class="stats-section">
                <div class="container">
                    <FadeInSection>
                        <div class="stats-panel">
                            <div class="section-heading centered">
                                <h2>{"Статистика "}<span class="accent">{"2024"}</span></h2>
                                <p>{"Общая статистика профессиональной сцены CS:GO"}</p>
                            </div>
                            <div class="stats-grid">
                                {
                                    SEASON_STATS.iter().map(|stat| {
                                        html! { <StatFeature key={stat.label} stat={stat.clone()} /> }
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>
                    </FadeInSection>
                </div>
            </section>

            <section id="about" class="about-section">
                <div class="container about-grid">
                    <FadeInSection>
                        <div class="about-image-frame">
                            <img src={ABOUT_IMAGE} alt="CS:GO Gaming Setup" loading="lazy" />
                        </div>
                    </FadeInSection>

                    <FadeInSection delay_ms={200}>
                        <div>
                            <div class="section-heading">
                                <h2>{"О нашем "}<span class="accent">{"проекте"}</span></h2>
                            </div>
                            <p class="about-copy">
                                {"CS:GO Hub — это централизованная платформа для отслеживания всего, что связано с миром Counter-Strike. Мы собираем данные из всех крупных турниров, анализируем статистику игроков и предоставляем актуальную информацию в удобном формате."}
                            </p>
                            <p class="about-copy">
                                {"Наша цель — сделать киберспорт более доступным и понятным для каждого фаната CS:GO."}
                            </p>

                            <div class="about-features">
                                <div class="about-feature">
                                    <div class="about-feature-icon">{"⚡"}</div>
                                    <div>
                                        <h4>{"Live обновления"}</h4>
                                        <p>{"Данные обновляются в реальном времени"}</p>
                                    </div>
                                </div>
                                <div class="about-feature">
                                    <div class="about-feature-icon">{"🛡"}</div>
                                    <div>
                                        <h4>{"Достоверность"}</h4>
                                        <p>{"Только проверенные источники"}</p>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </FadeInSection>
                </div>
            </section>

            <ContactSection />
            <Footer />
        </div>
    }
}

const HOME_CSS: &str = r#"
html { scroll-behavior: smooth; }
body {
    margin: 0;
    background: linear-gradient(to bottom, #020617, #0f172a, #020617);
    color: #fff;
    font-family: 'Segoe UI', -apple-system, BlinkMacSystemFont, Roboto, Helvetica, Arial, sans-serif;
    overflow-x: hidden;
}
.container {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}
.section-heading h2 {
    font-size: 2.5rem;
    font-weight: 900;
    color: #fff;
    margin: 0 0 1rem;
}
.section-heading .accent { color: #f59e0b; }
.section-heading p {
    color: #94a3b8;
    font-size: 1.125rem;
    margin: 0;
}
.section-heading.centered {
    text-align: center;
    margin-bottom: 4rem;
}
.section-heading.centered p {
    max-width: 42rem;
    margin: 0 auto;
}

.reveal {
    opacity: 0;
    transform: translateY(40px);
    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
}
.reveal.visible {
    opacity: 1;
    transform: none;
}

/* Hero */
.hero {
    position: relative;
    padding: 12rem 0 8rem;
    overflow: hidden;
}
.hero-background {
    position: absolute;
    inset: 0;
    background-size: cover;
    background-position: center;
    opacity: 0.2;
}
.hero-background::after {
    content: '';
    position: absolute;
    inset: 0;
    background: linear-gradient(to right, #020617, rgba(2, 6, 23, 0.95), rgba(2, 6, 23, 0.8));
}
.hero-content { position: relative; z-index: 1; }
.hero-inner { max-width: 48rem; }
.live-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    color: #f59e0b;
    font-weight: 600;
    margin-bottom: 1.5rem;
}
.live-dot {
    width: 8px;
    height: 8px;
    background: #f59e0b;
    border-radius: 50%;
    animation: pulse 1.5s ease-in-out infinite;
}
@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.3; }
}
.hero-title {
    font-size: 5rem;
    font-weight: 900;
    letter-spacing: -0.02em;
    line-height: 1;
    margin: 0 0 1.5rem;
}
.hero-title-accent {
    background: linear-gradient(to right, #f59e0b, #ea580c);
    -webkit-background-clip: text;
    background-clip: text;
    -webkit-text-fill-color: transparent;
    color: transparent;
}
.hero-subtitle {
    font-size: 1.375rem;
    color: #94a3b8;
    line-height: 1.6;
    max-width: 42rem;
    margin: 0 0 2rem;
}
.hero-cta-group {
    display: flex;
    gap: 1rem;
    flex-wrap: wrap;
}
.hero-cta {
    background: #f59e0b;
    color: #020617;
    border: none;
    border-radius: 12px;
    padding: 1rem 2rem;
    font-size: 1.125rem;
    font-weight: 700;
    cursor: pointer;
    transition: all 0.3s;
}
.hero-cta:hover {
    background: #d97706;
    transform: scale(1.05);
}
.hero-cta.secondary {
    background: #1e293b;
    color: #fff;
    border: 1px solid #334155;
}
.hero-cta.secondary:hover { background: #334155; }
.hero-stats {
    margin-top: 4rem;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1.5rem;
}
.hero-stat-card {
    background: rgba(15, 23, 42, 0.5);
    backdrop-filter: blur(4px);
    border: 1px solid #1e293b;
    border-radius: 12px;
    padding: 1rem;
}
.hero-stat-value {
    font-size: 1.75rem;
    font-weight: 900;
    color: #fff;
}
.hero-stat-value.accent { color: #f59e0b; }
.hero-stat-label {
    font-size: 0.875rem;
    color: #94a3b8;
}

/* Matches */
.matches-section {
    padding: 5rem 0;
    background: #020617;
}
.matches-header {
    display: flex;
    align-items: flex-end;
    justify-content: space-between;
    margin-bottom: 3rem;
    gap: 1rem;
}
.all-matches-link {
    background: none;
    border: none;
    padding: 0;
    color: #f59e0b;
    font-weight: 600;
    font-size: 1rem;
    cursor: pointer;
    transition: color 0.3s;
}
.all-matches-link:hover { color: #fbbf24; }
.match-list { display: flex; flex-direction: column; gap: 1rem; }
.match-card {
    background: linear-gradient(135deg, #1e293b, #0f172a);
    border: 1px solid rgba(51, 65, 85, 0.5);
    border-radius: 16px;
    padding: 1.5rem;
    transition: all 0.3s;
}
.match-card:hover {
    border-color: rgba(245, 158, 11, 0.5);
    transform: scale(1.02);
}
.match-card-top {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 1rem;
}
.match-meta {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}
.tournament-badge {
    font-size: 0.75rem;
    font-weight: 600;
    color: #f59e0b;
    background: rgba(245, 158, 11, 0.1);
    padding: 0.25rem 0.75rem;
    border-radius: 999px;
}
.match-time { font-size: 0.75rem; color: #94a3b8; }
.match-status {
    font-size: 0.75rem;
    font-weight: 600;
    padding: 0.25rem 0.5rem;
    border-radius: 4px;
}
.match-status.live {
    background: rgba(239, 68, 68, 0.2);
    color: #f87171;
    animation: pulse 1.5s ease-in-out infinite;
}
.match-status.finished {
    background: rgba(34, 197, 94, 0.2);
    color: #4ade80;
}
.match-status.upcoming {
    background: rgba(71, 85, 105, 0.2);
    color: #94a3b8;
}
.match-teams {
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.team {
    display: flex;
    align-items: center;
    gap: 1rem;
    flex: 1;
}
.team.team-right { justify-content: flex-end; text-align: right; }
.team-tag {
    width: 48px;
    height: 48px;
    background: #334155;
    border-radius: 8px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.125rem;
    font-weight: 700;
    color: #fff;
    flex-shrink: 0;
}
.team-name { font-weight: 700; color: #fff; margin: 0; }
.team-rank { font-size: 0.875rem; color: #94a3b8; }
.match-center {
    padding: 0 1.5rem;
    text-align: center;
}
.match-score {
    font-size: 1.875rem;
    font-weight: 900;
    color: #f59e0b;
}
.match-map { font-size: 0.75rem; color: #64748b; }
.match-card-bottom {
    margin-top: 1rem;
    padding-top: 1rem;
    border-top: 1px solid rgba(51, 65, 85, 0.5);
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.match-extras {
    display: flex;
    gap: 1rem;
    font-size: 0.875rem;
    color: #94a3b8;
}
.watch-link {
    background: none;
    border: none;
    padding: 0;
    color: #f59e0b;
    font-size: 0.875rem;
    font-weight: 600;
    cursor: pointer;
    transition: color 0.3s;
}
.watch-link:hover { color: #fbbf24; }

/* Players */
.players-section {
    padding: 5rem 0;
    background: linear-gradient(to bottom, #020617, #0f172a);
}
.players-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1.5rem;
}
.player-card {
    position: relative;
    overflow: hidden;
    background: linear-gradient(135deg, #1e293b, #0f172a);
    border: 1px solid rgba(51, 65, 85, 0.5);
    border-radius: 16px;
    padding: 1.5rem;
    transition: all 0.3s;
}
.player-card:hover {
    border-color: rgba(245, 158, 11, 0.5);
    transform: translateY(-8px);
}
.player-card-top {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    margin-bottom: 1rem;
}
.rating-block {
    width: 64px;
    height: 64px;
    background: linear-gradient(135deg, #f59e0b, #ea580c);
    border-radius: 12px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    font-weight: 900;
    color: #fff;
}
.trend-chip {
    font-size: 0.75rem;
    font-weight: 600;
    padding: 0.25rem 0.75rem;
    border-radius: 999px;
}
.trend-chip.up {
    background: rgba(34, 197, 94, 0.2);
    color: #4ade80;
}
.trend-chip.down {
    background: rgba(239, 68, 68, 0.2);
    color: #f87171;
}
.player-name {
    font-size: 1.25rem;
    font-weight: 700;
    color: #fff;
    margin: 0 0 0.25rem;
}
.player-team {
    color: #f59e0b;
    font-weight: 600;
    margin: 0 0 1rem;
}
.player-stats {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 0.75rem;
}
.player-stat {
    background: rgba(15, 23, 42, 0.5);
    border-radius: 8px;
    padding: 0.75rem;
}
.player-stat-label {
    display: block;
    font-size: 0.75rem;
    color: #94a3b8;
}
.player-stat-value {
    font-size: 1.125rem;
    font-weight: 700;
    color: #fff;
}

/* Season stats */
.stats-section {
    padding: 5rem 0;
    background: #0f172a;
}
.stats-panel {
    background: linear-gradient(135deg, #1e293b, #0f172a);
    border: 1px solid rgba(51, 65, 85, 0.5);
    border-radius: 24px;
    padding: 4rem 2rem;
}
.stats-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
}
.stat-feature { text-align: center; padding: 1.5rem; }
.stat-icon {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 64px;
    height: 64px;
    background: rgba(245, 158, 11, 0.1);
    border-radius: 16px;
    font-size: 1.75rem;
    margin-bottom: 1rem;
}
.stat-value {
    font-size: 2.75rem;
    font-weight: 900;
    color: #fff;
    margin-bottom: 0.5rem;
}
.stat-label { color: #94a3b8; margin-bottom: 0.5rem; }
.stat-trend { font-size: 0.875rem; color: #4ade80; }

/* About */
.about-section {
    padding: 5rem 0;
    background: #020617;
}
.about-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: center;
}
.about-image-frame { position: relative; }
.about-image-frame::before {
    content: '';
    position: absolute;
    inset: -1rem;
    background: linear-gradient(to right, rgba(245, 158, 11, 0.2), rgba(234, 88, 12, 0.2));
    border-radius: 24px;
    filter: blur(40px);
}
.about-image-frame img {
    position: relative;
    width: 100%;
    border-radius: 16px;
    border: 1px solid #1e293b;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
}
.about-copy {
    color: #94a3b8;
    font-size: 1.125rem;
    line-height: 1.7;
    margin: 0 0 1.5rem;
}
.about-features {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
    margin-top: 2rem;
}
.about-feature {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
}
.about-feature-icon {
    width: 40px;
    height: 40px;
    background: rgba(245, 158, 11, 0.1);
    border-radius: 8px;
    display: flex;
    align-items: center;
    justify-content: center;
    flex-shrink: 0;
}
.about-feature h4 { color: #fff; margin: 0 0 0.25rem; }
.about-feature p {
    font-size: 0.875rem;
    color: #94a3b8;
    margin: 0;
}

@media (max-width: 950px) {
    .players-grid { grid-template-columns: repeat(2, 1fr); }
    .stats-grid { grid-template-columns: repeat(2, 1fr); }
}
@media (max-width: 768px) {
    .hero { padding: 8rem 0 5rem; }
    .hero-title { font-size: 3rem; }
    .hero-stats { grid-template-columns: repeat(2, 1fr); }
    .matches-header {
        flex-direction: column;
        align-items: flex-start;
    }
    .match-teams { flex-direction: column; gap: 1rem; }
    .team.team-right { justify-content: flex-start; text-align: left; }
    .players-grid { grid-template-columns: 1fr; }
    .about-grid { grid-template-columns: 1fr; }
    .section-heading h2 { font-size: 2rem; }
}
"#;
