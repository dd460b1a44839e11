use yew::prelude::*;

use crate::pages::home::scroll_to_section;

fn section_link(label: &'static str, target: &'static str) -> Html {
    html! {
        <li>
            <button
                class="footer-link"
                onclick={Callback::from(move |_: MouseEvent| scroll_to_section(target))}
            >
                {label}
            </button>
        </li>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    background: #020617;
                    border-top: 1px solid rgba(30, 41, 59, 0.5);
                    padding: 3rem 0;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    margin-bottom: 3rem;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }
                .footer-logo-mark {
                    width: 32px;
                    height: 32px;
                    background: linear-gradient(135deg, #f59e0b, #ea580c);
                    border-radius: 8px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1rem;
                }
                .footer-brand span {
                    font-size: 1.25rem;
                    font-weight: 900;
                    color: #fff;
                }
                .footer-brand .accent { color: #f59e0b; }
                .footer-blurb {
                    color: #94a3b8;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                .footer-col h4 {
                    color: #fff;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }
                .footer-col ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .footer-col li { margin-bottom: 0.5rem; }
                .footer-link {
                    background: none;
                    border: none;
                    padding: 0;
                    cursor: pointer;
                    color: #94a3b8;
                    font-size: 0.875rem;
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .footer-link:hover { color: #f59e0b; }
                .social-row { display: flex; gap: 1rem; }
                .social-tile {
                    width: 40px;
                    height: 40px;
                    background: #1e293b;
                    border-radius: 8px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #94a3b8;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-decoration: none;
                    transition: all 0.3s;
                }
                .social-tile:hover { background: #f59e0b; color: #020617; }
                .footer-bottom {
                    border-top: 1px solid rgba(30, 41, 59, 0.5);
                    padding-top: 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }
                .footer-bottom p { color: #64748b; font-size: 0.875rem; margin: 0; }
                .footer-legal { display: flex; gap: 1.5rem; }
                .footer-legal a {
                    color: #64748b;
                    font-size: 0.875rem;
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .footer-legal a:hover { color: #94a3b8; }
                @media (max-width: 768px) {
                    .footer-grid { grid-template-columns: 1fr; }
                    .footer-bottom { flex-direction: column; }
                }
                "#}
            </style>
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-col">
                        <div class="footer-brand">
                            <div class="footer-logo-mark">{"🎯"}</div>
                            <span>{"CS:GO"}<span class="accent">{"HUB"}</span></span>
                        </div>
                        <p class="footer-blurb">
                            {"Ваш центр вселенной Counter-Strike. Матчи, статистика, игроки — всё в одном месте."}
                        </p>
                    </div>

                    <div class="footer-col">
                        <h4>{"Разделы"}</h4>
                        <ul>
                            { section_link("Матчи", "matches") }
                            { section_link("Игроки", "players") }
                            { section_link("Статистика", "stats") }
                        </ul>
                    </div>

                    <div class="footer-col">
                        <h4>{"Поддержка"}</h4>
                        <ul>
                            <li><a href="#" class="footer-link">{"FAQ"}</a></li>
                            <li><a href="#" class="footer-link">{"Контакты"}</a></li>
                            <li><a href="#" class="footer-link">{"API"}</a></li>
                        </ul>
                    </div>

                    <div class="footer-col">
                        <h4>{"Социальные сети"}</h4>
                        <div class="social-row">
                            <a href="#" class="social-tile" title="Twitter">{"TW"}</a>
                            <a href="#" class="social-tile" title="YouTube">{"YT"}</a>
                            <a href="#" class="social-tile" title="Twitch">{"TV"}</a>
                            <a href="#" class="social-tile" title="Discord">{"DS"}</a>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{"© 2024 CS:GO Hub. Все права защищены."}</p>
                    <div class="footer-legal">
                        <a href="#">{"Политика конфиденциальности"}</a>
                        <a href="#">{"Условия использования"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
