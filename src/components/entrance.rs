use yew::prelude::*;

use crate::animation::Entrance;

#[derive(Properties, PartialEq)]
pub struct EntranceBlockProps {
    #[prop_or_default]
    pub entrance: Entrance,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a div that slides up and fades in once on mount.
#[function_component(EntranceBlock)]
pub fn entrance_block(props: &EntranceBlockProps) -> Html {
    html! {
        <div class={classes!("entrance", props.class.clone())} style={props.entrance.style()}>
            { for props.children.iter() }
        </div>
    }
}
