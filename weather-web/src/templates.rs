//! Embedded page templates rendered with Tera.

use tera::{Context, Tera};
use weather_core::WeatherReport;

mod embedded {
    pub const BASE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{% block title %}Weather{% endblock %}</title>
    <style>
        body { font-family: system-ui, sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }
        form { display: flex; gap: .5rem; margin-bottom: 2rem; }
        input[name=search] { flex: 1; padding: .5rem; }
        .temp { font-size: 2.5rem; margin: 0; }
        .forecast { display: flex; gap: 1rem; list-style: none; padding: 0; }
        .forecast li { display: flex; flex-direction: column; align-items: center; }
    </style>
</head>
<body>
    <form method="post" action="/">
        <input type="text" name="search" placeholder="Search for a city" required>
        <button type="submit">Search</button>
    </form>
    {% block content %}{% endblock %}
</body>
</html>
"#;

    pub const INDEX: &str = r#"{% extends "base.html" %}
{% block content %}
<h1>Weather</h1>
<p>Enter a city to see current conditions and the next days' forecast.</p>
{% endblock %}
"#;

    pub const CITY: &str = r#"{% extends "base.html" %}
{% block title %}{{ place_name }} - Weather{% endblock %}
{% block content %}
<h1 class="place">{{ place_name }}</h1>
<p class="date">{{ display_date }}</p>
<section class="current">
    <p class="temp">{{ current.temperature_c }}°C</p>
    <p class="condition">{{ current.condition }}</p>
    <p>Min {{ current.min_temperature_c }}°C / Max {{ current.max_temperature_c }}°C</p>
    <p>Wind {{ current.wind_speed }} m/s</p>
</section>
<ul class="forecast">
{% for entry in forecast %}
    <li>
        <span class="day">{{ entry.day }}</span>
        <span class="forecast-temp">{{ entry.temperature_c }}°C</span>
        <span class="condition">{{ entry.condition }}</span>
    </li>
{% endfor %}
</ul>
{% endblock %}
"#;

    pub const ERROR: &str = r#"{% extends "base.html" %}
{% block title %}City not found - Weather{% endblock %}
{% block content %}
<h1>Something went wrong</h1>
<p class="error">We couldn't find weather for that city. Check the spelling and try again.</p>
{% endblock %}
"#;
}

/// The compiled page set.
pub struct Pages {
    tera: Tera,
}

impl std::fmt::Debug for Pages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pages").finish_non_exhaustive()
    }
}

impl Pages {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);
        tera.add_raw_templates(vec![
            ("base.html", embedded::BASE),
            ("index.html", embedded::INDEX),
            ("city.html", embedded::CITY),
            ("error.html", embedded::ERROR),
        ])?;

        Ok(Self { tera })
    }

    pub fn index(&self) -> Result<String, tera::Error> {
        self.tera.render("index.html", &Context::new())
    }

    pub fn report(&self, report: &WeatherReport) -> Result<String, tera::Error> {
        self.tera.render("city.html", &Context::from_serialize(report)?)
    }

    pub fn error(&self) -> Result<String, tera::Error> {
        self.tera.render("error.html", &Context::new())
    }
}
