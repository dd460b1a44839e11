use yew::prelude::*;

use crate::data::Player;

#[derive(Properties, PartialEq)]
pub struct PlayerCardProps {
    pub player: Player,
}

#[function_component(PlayerCard)]
pub fn player_card(props: &PlayerCardProps) -> Html {
    let player = &props.player;

    html! {
        <div class="player-card">
            <div class="player-card-top">
                <div class="rating-block">{player.rating.to_string()}</div>
                <span class={player.trend_class()}>{player.change_label()}</span>
            </div>

            <h3 class="player-name">{player.name}</h3>
            <p class="player-team">{player.team}</p>

            <div class="player-stats">
                <div class="player-stat">
                    <span class="player-stat-label">{"K/D"}</span>
                    <span class="player-stat-value">{player.kd.to_string()}</span>
                </div>
                <div class="player-stat">
                    <span class="player-stat-label">{"HS%"}</span>
                    <span class="player-stat-value">{format!("{}%", player.hs)}</span>
                </div>
                <div class="player-stat">
                    <span class="player-stat-label">{"ADR"}</span>
                    <span class="player-stat-value">{player.adr.to_string()}</span>
                </div>
                <div class="player-stat">
                    <span class="player-stat-label">{"Maps"}</span>
                    <span class="player-stat-value">{player.maps.to_string()}</span>
                </div>
            </div>
        </div>
    }
}
