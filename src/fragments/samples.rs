//! Sample Projects
//!
//! Ready-made fragment sets for seeding the playground. The starter
//! sample is what a fresh session opens with; the others exist to show
//! off a particular corner of the pipeline.

/// A named, ready-to-load set of fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleProject {
    pub name: &'static str,
    pub markup: &'static str,
    pub style: &'static str,
    pub script: &'static str,
}

/// Starter sample - a small complete page with a head, a body and one
/// button wired to the script fragment. Loaded into a fresh session.
pub fn starter() -> SampleProject {
    SampleProject {
        name: "starter",
        markup: r#"<!DOCTYPE html>
<html>
<head>
  <title>Demo</title>
</head>
<body>
  <h1>Hello World</h1>
  <p>This is a demo page from the spark-pen playground.</p>
  <button onclick="clickMe()">Click me</button>
</body>
</html>"#,
        style: r#"body {
  font-family: Arial, Helvetica, sans-serif;
  margin: 2rem;
  color: #222;
}

h1 {
  color: #4f46e5;
}

button {
  padding: 0.5rem 1rem;
  border: none;
  border-radius: 4px;
  background: #4f46e5;
  color: #fff;
  cursor: pointer;
}"#,
        script: r#"function clickMe() {
  alert('Hello from spark-pen!');
}"#,
    }
}

/// Counter sample - state living in the script fragment, updated
/// through the DOM. Good for watching autorun rebuilds while typing.
pub fn counter() -> SampleProject {
    SampleProject {
        name: "counter",
        markup: r#"<!DOCTYPE html>
<html>
<head>
  <title>Counter</title>
</head>
<body>
  <div class="card">
    <p id="count">0</p>
    <button id="bump">+1</button>
  </div>
</body>
</html>"#,
        style: r#".card {
  max-width: 12rem;
  margin: 3rem auto;
  padding: 1rem;
  text-align: center;
  border: 1px solid #ddd;
  border-radius: 8px;
}

#count {
  font-size: 3rem;
  margin: 0.5rem 0;
}"#,
        script: r#"let n = 0;
document.getElementById('bump').addEventListener('click', () => {
  n += 1;
  document.getElementById('count').textContent = n;
});"#,
    }
}

/// Bare sample - no head, no body. Exercises the composer's synthesis
/// paths and shows that styling still applies to loose markup.
pub fn bare() -> SampleProject {
    SampleProject {
        name: "bare",
        markup: "<h1>Just a heading</h1>",
        style: "h1 { color: crimson; font-family: Georgia, serif; }",
        script: "console.log('bare fragment, styled anyway');",
    }
}

/// Look up a sample by name.
pub fn get_sample(name: &str) -> Option<SampleProject> {
    match name {
        "starter" => Some(starter()),
        "counter" => Some(counter()),
        "bare" => Some(bare()),
        _ => None,
    }
}

/// Names of all built-in samples.
pub fn sample_names() -> Vec<&'static str> {
    vec!["starter", "counter", "bare"]
}
