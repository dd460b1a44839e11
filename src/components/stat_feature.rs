use yew::prelude::*;

use crate::data::StatHighlight;

#[derive(Properties, PartialEq)]
pub struct StatFeatureProps {
    pub stat: StatHighlight,
}

#[function_component(StatFeature)]
pub fn stat_feature(props: &StatFeatureProps) -> Html {
    let stat = &props.stat;

    html! {
        <div class="stat-feature">
            <div class="stat-icon">{stat.icon}</div>
            <div class="stat-value">{stat.value}</div>
            <div class="stat-label">{stat.label}</div>
            {
                if let Some(trend) = stat.trend {
                    html! { <span class="stat-trend">{"📈 "}{trend}</span> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
