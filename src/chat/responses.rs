use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ChatError;

pub const WELCOME_GREETING: &str = "Welcome to the AI assistant chat! How can I help you today?\n\nAsk me about programming and I will answer with syntax-highlighted code examples.";
pub const CLEARED_GREETING: &str = "Conversation cleared! What else can I help you with?";

const PYTHON_EXAMPLE: &str = r#"Here is a Python example:

```python
def fibonacci(n):
    """Return the n-th Fibonacci number"""
    if n <= 1:
        return n
    return fibonacci(n-1) + fibonacci(n-2)

# Try it out
for i in range(10):
    print(f"F({i}) = {fibonacci(i)}")
```

This function computes the Fibonacci sequence recursively."#;

const JAVASCRIPT_EXAMPLE: &str = r#"Here are some JavaScript array operations:

```javascript
const numbers = [1, 2, 3, 4, 5];

// map transforms every element
const doubled = numbers.map(x => x * 2);
console.log('doubled:', doubled);

// filter keeps matching elements
const evens = numbers.filter(x => x % 2 === 0);
console.log('evens:', evens);

// reduce folds the array into a sum
const sum = numbers.reduce((acc, x) => acc + x, 0);
console.log('sum:', sum);
```"#;

const REACT_HOOK_EXAMPLE: &str = r#"A React Hook example:

```tsx
import React, { useState, useEffect } from 'react';

const Counter: React.FC = () => {
  const [count, setCount] = useState(0);

  useEffect(() => {
    document.title = `Counter: ${count}`;
  }, [count]);

  return (
    <div>
      <p>Current count: {count}</p>
      <button onClick={() => setCount(count + 1)}>
        Increment
      </button>
    </div>
  );
};
```

This component shows the basic usage of useState and useEffect."#;

const LANGUAGE_TABLE: &str = "
| Language   | Strengths                          |
| ---------- | ---------------------------------- |
| Python     | Readable, great for rapid delivery |
| JavaScript | The language of the web front end  |
| C++        | Fast, suited to systems software   |
";

pub const DEFAULT_RESPONSES: [&str; 4] = [
    PYTHON_EXAMPLE,
    JAVASCRIPT_EXAMPLE,
    REACT_HOOK_EXAMPLE,
    LANGUAGE_TABLE,
];

/// Picks an index in `0..count` for the next canned reply.
pub trait ReplySelector {
    fn pick(&mut self, count: usize) -> usize;
}

impl<F> ReplySelector for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, count: usize) -> usize {
        self(count)
    }
}

/// Uniform selection backed by a seedable RNG.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl ReplySelector for RandomSelector {
    fn pick(&mut self, count: usize) -> usize {
        self.rng.gen_range(0..count)
    }
}

/// Fixed, non-empty list of reply templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannedResponses {
    templates: Vec<String>,
}

impl CannedResponses {
    pub fn new(templates: Vec<String>) -> Result<Self, ChatError> {
        if templates.is_empty() {
            return Err(ChatError::EmptyResponseSet);
        }
        Ok(Self { templates })
    }

    /// Uses `templates` when non-empty, the built-in set otherwise.
    pub fn or_default(templates: Vec<String>) -> Self {
        match Self::new(templates) {
            Ok(responses) => responses,
            Err(err) => {
                log::debug!("{err}; using built-in replies");
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn get(&self, index: usize) -> &str {
        &self.templates[index % self.templates.len()]
    }

    pub fn pick(&self, selector: &mut dyn ReplySelector) -> &str {
        self.get(selector.pick(self.templates.len()))
    }
}

impl Default for CannedResponses {
    fn default() -> Self {
        Self {
            templates: DEFAULT_RESPONSES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_rejected() {
        assert_eq!(
            CannedResponses::new(Vec::new()),
            Err(ChatError::EmptyResponseSet)
        );
    }

    #[test]
    fn empty_configured_set_falls_back_to_defaults() {
        let responses = CannedResponses::or_default(Vec::new());
        assert_eq!(responses.len(), DEFAULT_RESPONSES.len());
    }

    #[test]
    fn out_of_range_index_wraps() {
        let responses =
            CannedResponses::new(vec!["a".to_string(), "b".to_string()]).unwrap();
        let mut selector = |_count: usize| 5;
        assert_eq!(responses.pick(&mut selector), "b");
    }

    #[test]
    fn seeded_selectors_repeat_the_same_sequence() {
        let mut first = RandomSelector::seeded(42);
        let mut second = RandomSelector::seeded(42);
        let a: Vec<usize> = (0..32).map(|_| first.pick(4)).collect();
        let b: Vec<usize> = (0..32).map(|_| second.pick(4)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn random_selection_reaches_every_template() {
        let mut selector = RandomSelector::seeded(7);
        let mut seen = [false; 4];
        for _ in 0..400 {
            let index = selector.pick(4);
            assert!(index < 4);
            seen[index] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn default_replies_include_fenced_code() {
        let responses = CannedResponses::default();
        assert!(responses.get(0).contains("```python"));
        assert!(responses.get(3).contains("| Language"));
    }
}
