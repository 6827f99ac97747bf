use yew::prelude::*;
use yew_router::components::Link;

use crate::components::optimized_image::OptimizedImage;
use crate::content::{self, BLOG_POSTS};
use crate::Route;

#[function_component(Blog)]
pub fn blog() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }
    html! {
        <div class="content-page blog-list-page">
            <section class="page-hero">
                <h1>{"Новости"}</h1>
                <p>{"Что нового в бане, советы по парению и сезонные предложения"}</p>
            </section>
            <section class="blog-list-section">
                { for BLOG_POSTS.iter().map(|post| html! {
                    <div class="blog-post-preview">
                        <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }}>
                            <OptimizedImage src={post.image} alt={post.title} class="blog-preview-image" />
                            <h2>{post.title}</h2>
                            <p>{post.summary}</p>
                            <span class="blog-date">{post.date}</span>
                        </Link<Route>>
                    </div>
                }) }
            </section>
            <style>
                {r#"
                .blog-list-section {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 2rem;
                    display: grid;
                    gap: 2rem;
                }
                .blog-post-preview a {
                    display: block;
                    color: inherit;
                    text-decoration: none;
                    background: #2a2119;
                    border-radius: 16px;
                    overflow: hidden;
                    padding-bottom: 1.5rem;
                    transition: transform 0.2s ease;
                }
                .blog-post-preview a:hover {
                    transform: translateY(-3px);
                }
                .blog-preview-image {
                    width: 100%;
                    height: 280px;
                    object-fit: cover;
                }
                .blog-post-preview h2, .blog-post-preview p, .blog-date {
                    padding: 0 1.5rem;
                }
                .blog-date {
                    color: #b8a78f;
                    font-size: 0.9rem;
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostPageProps {
    pub slug: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostPageProps) -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            props.slug.clone(),
        );
    }

    let Some(post) = content::post_by_slug(&props.slug) else {
        return html! {
            <div class="content-page">
                <section class="page-hero">
                    <h1>{"Статья не найдена"}</h1>
                    <Link<Route> to={Route::Blog} classes="forward-link">{"← Все новости"}</Link<Route>>
                </section>
            </div>
        };
    };

    html! {
        <div class="content-page">
            <article class="page-section blog-post">
                <Link<Route> to={Route::Blog} classes="forward-link">{"← Все новости"}</Link<Route>>
                <h1>{post.title}</h1>
                <span class="blog-date">{post.date}</span>
                <OptimizedImage src={post.image} alt={post.title} class="blog-post-image" eager={true} />
                { for post.body.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
            </article>
            <style>
                {r#"
                .blog-post h1 { margin-top: 1.5rem; }
                .blog-post p { font-size: 1.1rem; line-height: 1.75; color: #e0d3c1; }
                .blog-post-image { width: 100%; border-radius: 12px; margin: 1.5rem 0; }
                "#}
            </style>
        </div>
    }
}
