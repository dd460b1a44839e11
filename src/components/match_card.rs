use yew::prelude::*;

use crate::data::Match;

#[derive(Properties, PartialEq)]
pub struct MatchCardProps {
    pub info: Match,
}

#[function_component(MatchCard)]
pub fn match_card(props: &MatchCardProps) -> Html {
    let info = &props.info;

    html! {
        <div class="match-card">
            <div class="match-card-top">
                <div class="match-meta">
                    <span class="tournament-badge">{info.tournament}</span>
                    <span class="match-time">{"🕐 "}{info.time}</span>
                </div>
                <span class={info.status.badge_class()}>{info.status.label()}</span>
            </div>

            <div class="match-teams">
                <div class="team">
                    <div class="team-tag">{info.team1.short}</div>
                    <div>
                        <h4 class="team-name">{info.team1.name}</h4>
                        <span class="team-rank">{format!("#{} в мире", info.team1.rank)}</span>
                    </div>
                </div>

                <div class="match-center">
                    <div class="match-score">{info.score_label()}</div>
                    <span class="match-map">{info.map}</span>
                </div>

                <div class="team team-right">
                    <div>
                        <h4 class="team-name">{info.team2.name}</h4>
                        <span class="team-rank">{format!("#{} в мире", info.team2.rank)}</span>
                    </div>
                    <div class="team-tag">{info.team2.short}</div>
                </div>
            </div>

            <div class="match-card-bottom">
                <div class="match-extras">
                    <span>{"🏆 "}{info.prize}</span>
                    <span>{"👥 "}{format!("{} зрителей", info.viewers)}</span>
                </div>
                <button class="watch-link">{"Смотреть →"}</button>
            </div>
        </div>
    }
}
