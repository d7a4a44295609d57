//! Scenario tests exercising the public board API end to end.
