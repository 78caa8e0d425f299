mod breakout;
mod fixtures;
mod metrics;
