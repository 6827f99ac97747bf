use yew::prelude::*;

/// Times the primary source is re-requested before falling back.
pub const MAX_RETRIES: u8 = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed,
}

/// Source selection for an image that may fail to load: retry the primary
/// source with a cache buster, then try the fallback, then give up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageLoader {
    primary: String,
    fallback: Option<String>,
    retries: u8,
    using_fallback: bool,
    pub state: LoadState,
}

impl ImageLoader {
    pub fn new(primary: impl Into<String>, fallback: Option<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback,
            retries: 0,
            using_fallback: false,
            state: LoadState::Loading,
        }
    }

    pub fn current_src(&self) -> Option<String> {
        if self.state == LoadState::Failed {
            return None;
        }
        if self.using_fallback {
            return self.fallback.clone();
        }
        if self.retries == 0 {
            Some(self.primary.clone())
        } else {
            let sep = if self.primary.contains('?') { '&' } else { '?' };
            Some(format!("{}{}retry={}", self.primary, sep, self.retries))
        }
    }

    pub fn on_load(&mut self) {
        self.state = LoadState::Loaded;
    }

    pub fn on_error(&mut self) {
        if self.using_fallback {
            self.state = LoadState::Failed;
        } else if self.retries < MAX_RETRIES {
            self.retries += 1;
        } else if self.fallback.is_some() {
            self.using_fallback = true;
        } else {
            self.state = LoadState::Failed;
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct OptimizedImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub fallback: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub eager: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(OptimizedImage)]
pub fn optimized_image(props: &OptimizedImageProps) -> Html {
    let loader = use_state(|| {
        ImageLoader::new(props.src.to_string(), props.fallback.as_ref().map(|f| f.to_string()))
    });

    {
        let loader = loader.clone();
        let fallback = props.fallback.clone();
        use_effect_with_deps(move |src: &AttrValue| {
            loader.set(ImageLoader::new(src.to_string(), fallback.map(|f| f.to_string())));
            || ()
        }, props.src.clone());
    }

    let onload = {
        let loader = loader.clone();
        Callback::from(move |_: Event| {
            let mut next = (*loader).clone();
            next.on_load();
            loader.set(next);
        })
    };

    let onerror = {
        let loader = loader.clone();
        Callback::from(move |_: Event| {
            let mut next = (*loader).clone();
            next.on_error();
            if next.state == LoadState::Failed {
                log::warn!("Image failed to load: {}", next.primary);
            }
            loader.set(next);
        })
    };

    let loading = if props.eager { "eager" } else { "lazy" };

    match loader.current_src() {
        Some(src) => html! {
            <img
                class={classes!(props.class.clone(), "optimized-image", (loader.state == LoadState::Loading).then(|| "is-loading"))}
                src={src}
                alt={props.alt.clone()}
                loading={loading}
                decoding="async"
                {onload}
                {onerror}
                onclick={props.onclick.clone()}
            />
        },
        None => html! {
            <div class={classes!(props.class.clone(), "image-placeholder")} role="img" aria-label={props.alt.clone()}>
                <span>{"🌲"}</span>
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retries_primary_then_uses_fallback() {
        let mut loader = ImageLoader::new("/a.webp", Some("/a.jpg".into()));
        assert_eq!(loader.current_src().as_deref(), Some("/a.webp"));
        loader.on_error();
        assert_eq!(loader.current_src().as_deref(), Some("/a.webp?retry=1"));
        loader.on_error();
        assert_eq!(loader.current_src().as_deref(), Some("/a.webp?retry=2"));
        loader.on_error();
        assert_eq!(loader.current_src().as_deref(), Some("/a.jpg"));
        loader.on_error();
        assert_eq!(loader.state, LoadState::Failed);
        assert_eq!(loader.current_src(), None);
    }

    #[test]
    fn fails_after_retries_without_fallback() {
        let mut loader = ImageLoader::new("/b.webp?w=400", None);
        loader.on_error();
        assert_eq!(loader.current_src().as_deref(), Some("/b.webp?w=400&retry=1"));
        loader.on_error();
        loader.on_error();
        assert_eq!(loader.state, LoadState::Failed);
    }

    #[test]
    fn load_keeps_current_source() {
        let mut loader = ImageLoader::new("/c.webp", None);
        loader.on_error();
        loader.on_load();
        assert_eq!(loader.state, LoadState::Loaded);
        assert_eq!(loader.current_src().as_deref(), Some("/c.webp?retry=1"));
    }
}
