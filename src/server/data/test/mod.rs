mod sport;
